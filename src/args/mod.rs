use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// Parses the command line; clap exits with a usage message on bad input.
#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        let player_name = args.player_name.trim();
        CleanArgs {
            host: args.host,
            port: args.port,
            player_name: if player_name.is_empty() {
                "Player".to_string()
            } else {
                player_name.to_string()
            },
            static_dir: args.static_dir,
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
