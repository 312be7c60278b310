use gumdrop::Options;

#[derive(Options, Debug, Default)]
pub struct AppOptions {
    /// Print this help message
    #[options()]
    help: bool,
    /// Integer scale factor for the window
    #[options(default = "3")]
    pub scale: u32,
    /// Disable the 60 FPS cap and run frames as fast as they render
    #[options()]
    pub uncapped: bool,
    /// First score that ends a round
    #[options(default = "6")]
    pub score_limit: u8,
}
