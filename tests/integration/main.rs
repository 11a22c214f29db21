mod cli;
mod generate;
mod helpers;
