// SPDX-License-Identifier: GPL-3.0
// main.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use std::{
    error::Error,
    ffi::OsString,
    fs,
    process::ExitCode,
};

// This file is the core of the basic client - it exists merely as a CLI-based
// program to load an Intcode program from disk and run it, either on a single
// machine or as a feedback network.

use clap::{ArgAction, Parser};
use intcode_core::{
    machine::{intcode_machine::IntcodeMachine, Machine, State},
    network::{
        feedback_network::{best_phase_setting, FeedbackNetwork},
        NetworkConfig,
    },
    program::parse_program,
};
use log::{error, info, LevelFilter};

/// Exit status used when a single machine is left waiting for input.
const EXIT_WAITING_FOR_INPUT: u8 = 2;

#[derive(Parser)]
#[command(
    version,
    about = "A basic command-line runner for Intcode programs",
    long_about = None
)]
struct IntcodeArgs {
    #[arg(
        long = "program",
        help = "A file holding a comma-separated Intcode program",
        id = "Program file"
    )]
    program: OsString,

    #[arg(
        long = "input",
        help = "Comma-separated inputs for a single machine",
        value_delimiter = ',',
        allow_negative_numbers = true,
        id = "Input list"
    )]
    input: Vec<i64>,

    #[arg(
        long = "phases",
        help = "Comma-separated phases, one per machine in a feedback network",
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with_all = ["Input list", "Search list"],
        id = "Phase list"
    )]
    phases: Vec<i64>,

    #[arg(
        long = "search",
        help = "Comma-separated phase values to try in every order",
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with_all = ["Input list", "Phase list"],
        id = "Search list"
    )]
    search: Vec<i64>,

    #[arg(
        long = "signal",
        help = "The signal handed to the first machine of a network",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    signal: i64,

    #[arg(
        long = "max-rounds",
        help = "Scheduling rounds allowed before a network is declared stuck",
        default_value_t = 10_000
    )]
    max_rounds: usize,

    #[arg(
        long = "step-limit",
        help = "Instructions a machine may execute per run before it is failed"
    )]
    step_limit: Option<u64>,

    #[arg(
        long = "dump",
        help = "Addresses to print after a single machine run",
        value_delimiter = ',',
        conflicts_with_all = ["Phase list", "Search list"]
    )]
    dump: Vec<i64>,

    #[arg(
        short = 'v',
        help = "Increase log verbosity (repeat for more)",
        action = ArgAction::Count
    )]
    verbose: u8,
}

fn main() -> ExitCode {
    let intcode_args = IntcodeArgs::parse();

    let mut builder = colog::default_builder();
    builder.filter_level(match intcode_args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
    builder.init();

    match run(&intcode_args) {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        },
    }
}

/// Loads the program and dispatches to the requested mode.
fn run(intcode_args: &IntcodeArgs) -> Result<ExitCode, Box<dyn Error>> {

    let text = fs::read_to_string(&intcode_args.program)?;
    let program = parse_program(&text)?;
    info!("loaded {} values from {:?}", program.len(), intcode_args.program);

    let config = NetworkConfig {
        max_rounds: intcode_args.max_rounds,
        initial_signal: intcode_args.signal,
        step_limit: intcode_args.step_limit,
    };

    if !intcode_args.search.is_empty() {
        let (phases, output) = best_phase_setting(&program, &intcode_args.search, config)?;
        println!("{}", join(&phases));
        println!("{output}");
        return Ok(ExitCode::SUCCESS);
    }

    if !intcode_args.phases.is_empty() {
        let output = FeedbackNetwork::new(&program, &intcode_args.phases, config).run()?;
        println!("{output}");
        return Ok(ExitCode::SUCCESS);
    }

    run_single(&program, intcode_args)
}

/// Runs one machine, printing its outputs and any requested memory cells.
fn run_single(program: &[i64], intcode_args: &IntcodeArgs) -> Result<ExitCode, Box<dyn Error>> {

    let mut machine = IntcodeMachine::new(program, &intcode_args.input);
    if let Some(limit) = intcode_args.step_limit {
        machine = machine.with_step_limit(limit);
    }

    let state = machine.run()?;
    for value in machine.take_pending_output() {
        println!("{value}");
    }
    for &address in &intcode_args.dump {
        println!("[{address}] = {}", machine.memory_at(address)?);
    }

    if state == State::WaitingForInput {
        error!(
            "machine is waiting for input at address {}",
            machine.instruction_pointer()
        );
        return Ok(ExitCode::from(EXIT_WAITING_FOR_INPUT));
    }

    Ok(ExitCode::SUCCESS)
}

/// Formats values the way programs are written, comma-separated.
fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {

    use clap::Parser;

    use super::{join, IntcodeArgs};

    #[test]
    fn args_should_parse_negative_comma_separated_inputs() {

        let args = IntcodeArgs::try_parse_from(["intcode", "--program", "p.txt", "--input", "-1,5"])
            .unwrap();

        assert_eq!(args.input, vec![-1, 5]);
        assert!(args.phases.is_empty());
        assert_eq!(args.max_rounds, 10_000);
    }

    #[test]
    fn args_should_reject_phases_together_with_search() {

        let output = IntcodeArgs::try_parse_from([
            "intcode", "--program", "p.txt", "--phases", "9,8", "--search", "5,6",
        ]);

        assert!(output.is_err());
    }

    #[test]
    fn args_should_reject_dump_outside_single_machine_runs() {

        let with_phases = IntcodeArgs::try_parse_from([
            "intcode", "--program", "p.txt", "--phases", "9,8", "--dump", "0",
        ]);
        let with_search = IntcodeArgs::try_parse_from([
            "intcode", "--program", "p.txt", "--search", "5,6", "--dump", "0",
        ]);
        let with_input = IntcodeArgs::try_parse_from([
            "intcode", "--program", "p.txt", "--input", "1", "--dump", "0,4",
        ]);

        assert!(with_phases.is_err());
        assert!(with_search.is_err());
        assert_eq!(with_input.unwrap().dump, vec![0, 4]);
    }

    #[test]
    fn args_should_count_verbosity_flags() {

        let args = IntcodeArgs::try_parse_from(["intcode", "--program", "p.txt", "-vv"]).unwrap();

        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn join_should_use_commas() {

        assert_eq!(join(&[9, 8, 7]), "9,8,7");
        assert_eq!(join(&[]), "");
    }
}
