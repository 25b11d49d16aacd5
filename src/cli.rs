use clap::{arg, crate_version, Arg, ArgAction, Command, ValueHint};

const LONG_HELP: &str = "linksleeve is always invoked with exactly one subcommand.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
Extract every course to JSON:  `linksleeve dump game.nes ./courses`
Repack a single course:        `linksleeve write game.nes ./courses/japan -o out.nes`
Pack one or two courses:       `linksleeve pack game.nes ./courses/japan ./courses/us -o out.nes`
Dump the compression tables:   `linksleeve extract-tables game.nes tables.json`
Build neighbor statistics:     `linksleeve analyze-neighbors ./courses/japan ./courses/us -o stats.json`
Fill a hole's forest:          `linksleeve fill ./courses/japan 3 --stats stats.json`";

pub fn build_cli() -> Command {
    Command::new("linksleeve")
        .about("Extracts, edits, and repacks NES golf cartridge course data.")
        .after_long_help(LONG_HELP)
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("dump")
                .about("extract all 54 holes from a ROM image into per-course JSON directories")
                .arg(arg!(<ROM> "ROM image to read").value_hint(ValueHint::FilePath))
                .arg(arg!(<OUT_DIR> "directory to write course subdirectories into").value_hint(ValueHint::DirPath)),
        )
        .subcommand(
            Command::new("write")
                .about("pack one course into its already-assigned bank (single-course writer)")
                .arg(arg!(<ROM> "ROM image to read").value_hint(ValueHint::FilePath))
                .arg(arg!(<COURSE_DIR> "course directory containing course.json and hole_NN.json files").value_hint(ValueHint::DirPath))
                .arg(arg!(-o --out <FILE> "output ROM path (defaults to overwriting ROM)").required(false).value_hint(ValueHint::FilePath))
                .arg(arg!(-c --course <INDEX> "course index to write into (defaults to course.json's hole_offset)").required(false))
                .arg(Arg::new("validate-only").long("validate-only").action(ArgAction::SetTrue).help("report stats without writing"))
                .arg(Arg::new("verbose").short('v').long("verbose").action(ArgAction::SetTrue).help("log every table write")),
        )
        .subcommand(
            Command::new("pack")
                .about("compress, allocate, and write one or two courses with the multi-bank packer")
                .arg(arg!(<ROM> "ROM image to read").value_hint(ValueHint::FilePath))
                .arg(
                    Arg::new("course_dirs")
                        .help("one or two course directories")
                        .required(true)
                        .num_args(1..=2)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(arg!(-o --out <FILE> "output ROM path (defaults to overwriting ROM)").required(false).value_hint(ValueHint::FilePath))
                .arg(Arg::new("validate-only").long("validate-only").action(ArgAction::SetTrue).help("report stats without writing"))
                .arg(Arg::new("verbose").short('v').long("verbose").action(ArgAction::SetTrue).help("log every table write")),
        )
        .subcommand(
            Command::new("extract-tables")
                .about("dump the terrain and greens compression lookup tables as JSON")
                .arg(arg!(<ROM> "ROM image to read").value_hint(ValueHint::FilePath))
                .arg(arg!(<OUT> "JSON file to write").value_hint(ValueHint::FilePath)),
        )
        .subcommand(
            Command::new("analyze-neighbors")
                .about("scan course JSON directories and build tile-adjacency frequency statistics")
                .arg(
                    Arg::new("course_dirs")
                        .help("course directories to scan")
                        .required(true)
                        .num_args(1..)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(arg!(-o --out <FILE> "JSON file to write").required(true).value_hint(ValueHint::FilePath)),
        )
        .subcommand(
            Command::new("fill")
                .about("fill a hole's placeholder forest regions using neighbor statistics")
                .arg(arg!(<COURSE_DIR> "course directory containing the hole's JSON file").value_hint(ValueHint::DirPath))
                .arg(arg!(<HOLE> "hole number, 1-18"))
                .arg(arg!(--stats <FILE> "neighbor statistics JSON produced by analyze-neighbors").value_hint(ValueHint::FilePath))
                .arg(arg!(--"max-backtracks" <N> "backtrack budget override").required(false)),
        )
        .subcommand(
            Command::new("completions")
                .about("emit a shell completion script")
                .arg(arg!(<SHELL> "bash, zsh, fish, powershell, or elvish")),
        )
}
