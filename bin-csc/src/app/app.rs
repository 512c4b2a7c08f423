use log::info;
use clap::Parser;
use csc_matrix::sparse::{eigen, CscMat};
use super::input::RawInput;
use super::utils::{guard_panic, init_simple_logger, measure};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    pub input: Option<std::path::PathBuf>,

    #[arg(short, long, default_value_t = 1e-6)]
    pub tolerance: f64,

    #[arg(short, long)]
    pub absolute: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

impl CliArgs {
    fn log_level(&self) -> log::LevelFilter {
        use log::LevelFilter::*;
        match self.log {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> {
        init_simple_logger(self.args.log_level())?;

        info!("args: {:?}", self.args);

        let (res, time) = measure(|| self.dispatch());
        info!("time: {:?}", time);

        res
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> {
        guard_panic(|| {
            let input = self.read_input()?;
            let raw = RawInput::parse(&input)?;
            let n = raw.size();

            info!("matrix: {n} x {n}, raw entries: {}", raw.values.len());

            let a = CscMat::from_raw_parts((n, n), &raw.values, &raw.rows, &raw.boundaries)?;
            let lambda = eigen::find_dominant_eigenvalue_with(&a, self.args.tolerance, !self.args.absolute)?;

            Ok(lambda.to_string())
        })
    }

    fn read_input(&self) -> Result<String, Box<dyn std::error::Error>> {
        let res = match &self.args.input {
            Some(path) => std::fs::read_to_string(path)?,
            None => std::io::read_to_string(std::io::stdin())?
        };
        Ok(res)
    }
}
