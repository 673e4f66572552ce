use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "droid-icons",
    about = "Resize one image into every Android drawable density",
    long_about = "droid-icons converts a single source image into the ldpi, mdpi, hdpi, xhdpi, \
                  xxhdpi and xxxhdpi drawables an Android project expects, laid out as \
                  res/drawable-<density>/<name>. Optionally a 512px Play Store image is written \
                  to res/playstore/<name>.",
    version,
    after_help = "EXAMPLES:\n  \
    droid-icons -i icon.png -o ./app/src/main\n  \
    droid-icons -i icon.png -o ./app/src/main -p\n  \
    droid-icons -i icon@2x.png -o ./out -s 48\n  \
    droid-icons -i icon.png -o ./out -s 0 -p"
)]
pub struct Args {
    #[arg(short = 'i', long, help = "Input image file")]
    pub input: PathBuf,

    #[arg(short = 'o', long, help = "Output folder for the res/ tree")]
    pub output: PathBuf,

    #[arg(
        short = 's',
        long,
        help = "Size of the longest side for mdpi in px (0: use the image's longest side)",
        long_help = "Baseline size in pixels for the mdpi bucket. Every other bucket is \
                     scaled from it (ldpi 0.75x up to xxxhdpi 4x). When omitted or 0, the \
                     longest side of the input image is used."
    )]
    pub size: Option<u32>,

    #[arg(
        short = 'p',
        long,
        help = "Also create a 512px Play Store image",
        long_help = "Write an additional copy whose longest side is 512px to res/playstore. \
                     This size is fixed regardless of --size."
    )]
    pub playstore: bool,

    #[arg(short = 'q', long, help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print every variant as it is written")]
    pub verbose: bool,
}
