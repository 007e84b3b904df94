extern crate env_logger;
extern crate linkstack;

use std::io;

fn main() -> io::Result<()> {
    env_logger::init();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    linkstack::demo::run(&mut out)
}
