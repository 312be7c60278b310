use gumdrop::Options;

#[derive(Options, Debug, Default)]
pub struct HeadlessOptions {
    /// Print this help message
    #[options()]
    help: bool,
    /// How many frames to simulate before saving
    #[options(default = "600")]
    pub frames: usize,
    /// Where to write the resulting frame
    #[options(default = "frame.png")]
    pub output: String,
}
