mod benchmark;
mod common;
mod routing;
mod synthesizer;
