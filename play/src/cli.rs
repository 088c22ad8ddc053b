use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Quoridor")]
#[clap(about = "Plays and analyses Quoridor from the command line", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Play(PlayCommand),
    Perft(PerftCommand),
}

#[derive(Args)]
#[clap(about = "Starts a console session where each line is an action or a command.", long_about = None)]
pub struct PlayCommand {
    #[clap(short, long, default_value_t = String::from("play.conf"))]
    pub config: String,
}

#[derive(Args)]
#[clap(about = "Counts the action sequences of the given length from the initial position.", long_about = None)]
pub struct PerftCommand {
    #[clap(short, long)]
    pub depth: Option<usize>,

    #[clap(short, long, default_value_t = String::from("play.conf"))]
    pub config: String,
}
