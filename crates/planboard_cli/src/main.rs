//! Interactive console front end for the planboard.

use std::rc::Rc;

use anyhow::Result;
use log::info;
use planboard_core::logging::{default_log_level, init_logging};

mod actions;
mod board;
mod io_utils;
mod navigator;
mod pages;
mod prompts;

use board::Board;
use io_utils::get_user_input;
use navigator::Navigator;

const DB_FILE: &str = "planboard.db";
const LOG_DIR_NAME: &str = "logs";

fn main() -> Result<()> {
    // Logging wants an absolute directory; anchor it in the working dir.
    let log_dir = std::env::current_dir()?.join(LOG_DIR_NAME);
    if let Err(message) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging unavailable: {message}");
    }

    let db = Rc::new(Board::open(DB_FILE)?);
    info!("event=app_start module=cli status=ok db_file={DB_FILE}");
    let mut nav = Navigator::new(db);

    loop {
        let _ = clearscreen::clear();

        let page = match nav.get_current_page() {
            Some(page) => page,
            None => break,
        };

        if let Err(err) = page.draw_page() {
            eprintln!("{err}");
            pause_for_enter();
            continue;
        }

        let input = get_user_input();
        match page.handle_input(&input) {
            Ok(Some(action)) => {
                if let Err(err) = nav.handle_action(action) {
                    eprintln!("{err}");
                    pause_for_enter();
                }
            }
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                pause_for_enter();
            }
        }
    }

    info!("event=app_stop module=cli status=ok");
    Ok(())
}

fn pause_for_enter() {
    println!("press enter to continue");
    let _ = get_user_input();
}
