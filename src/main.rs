//! # Command Line Interface
//!
//! Dispatch subcommands to the `commands` module.

use std::path::PathBuf;
use std::str::FromStr;

use linksleeve::commands;
mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut main_cmd = cli::build_cli();
    let matches = main_cmd.clone().get_matches();

    if let Some(cmd) = matches.subcommand_matches("completions") {
        let shell_name = cmd.get_one::<String>("SHELL").unwrap();
        let shell = clap_complete::Shell::from_str(shell_name)
            .map_err(|_| format!("unrecognized shell '{shell_name}'"))?;
        commands::completions::run(&mut main_cmd, shell);
        return Ok(());
    }

    if let Some(cmd) = matches.subcommand_matches("dump") {
        let rom = PathBuf::from(cmd.get_one::<String>("ROM").unwrap());
        let out_dir = PathBuf::from(cmd.get_one::<String>("OUT_DIR").unwrap());
        return commands::dump::run(&rom, &out_dir);
    }

    if let Some(cmd) = matches.subcommand_matches("write") {
        let rom = PathBuf::from(cmd.get_one::<String>("ROM").unwrap());
        let course_dir = PathBuf::from(cmd.get_one::<String>("COURSE_DIR").unwrap());
        let out = cmd.get_one::<String>("out").map(PathBuf::from);
        let course_index = cmd.get_one::<String>("course").map(|s| s.parse()).transpose()?;
        let validate_only = cmd.get_flag("validate-only");
        let verbose = cmd.get_flag("verbose");
        return commands::write::run(&rom, &course_dir, out.as_deref(), course_index, validate_only, verbose);
    }

    if let Some(cmd) = matches.subcommand_matches("pack") {
        let rom = PathBuf::from(cmd.get_one::<String>("ROM").unwrap());
        let course_dirs: Vec<PathBuf> = cmd.get_many::<String>("course_dirs").unwrap().map(PathBuf::from).collect();
        let out = cmd.get_one::<String>("out").map(PathBuf::from);
        let validate_only = cmd.get_flag("validate-only");
        let verbose = cmd.get_flag("verbose");
        return commands::pack::run(&rom, &course_dirs, out.as_deref(), validate_only, verbose);
    }

    if let Some(cmd) = matches.subcommand_matches("extract-tables") {
        let rom = PathBuf::from(cmd.get_one::<String>("ROM").unwrap());
        let out = PathBuf::from(cmd.get_one::<String>("OUT").unwrap());
        return commands::extract_tables::run(&rom, &out);
    }

    if let Some(cmd) = matches.subcommand_matches("analyze-neighbors") {
        let course_dirs: Vec<PathBuf> = cmd.get_many::<String>("course_dirs").unwrap().map(PathBuf::from).collect();
        let out = PathBuf::from(cmd.get_one::<String>("out").unwrap());
        return commands::analyze_neighbors::run(&course_dirs, &out);
    }

    if let Some(cmd) = matches.subcommand_matches("fill") {
        let course_dir = PathBuf::from(cmd.get_one::<String>("COURSE_DIR").unwrap());
        let hole: u32 = cmd.get_one::<String>("HOLE").unwrap().parse()?;
        let stats = PathBuf::from(cmd.get_one::<String>("stats").unwrap());
        let max_backtracks = cmd.get_one::<String>("max-backtracks").map(|s| s.parse()).transpose()?;
        return commands::fill::run(&course_dir, hole, &stats, max_backtracks);
    }

    Ok(())
}
