use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use std::io;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), cfg).run()
}
