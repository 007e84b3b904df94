use stack::Stack;

use std::io::{self, Write};

/// Runs the demonstration script: inserts 0..4 dumping the stack after each
/// insert, then shows the top and pops twice.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let mut stack: Stack<i32> = Stack::new();
    for value in 0..5 {
        stack.insert(value);
        writeln!(out, "{}", stack)?;
    }
    debug!("inserted {} values", stack.size());

    writeln!(out, "Top stack: {}", stack.top())?;
    writeln!(out, "Pop stack: {}", stack.pop())?;
    writeln!(out, "{}", stack)?;
    writeln!(out, "Pop stack: {}", stack.pop())?;
    writeln!(out, "{}", stack)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate env_logger;
    use super::*;

    const GOLDEN: &str = "\
Stack: {0, }
Stack: {1, 0, }
Stack: {2, 1, 0, }
Stack: {3, 2, 1, 0, }
Stack: {4, 3, 2, 1, 0, }
Top stack: 4
Pop stack: 4
Stack: {3, 2, 1, 0, }
Pop stack: 3
Stack: {2, 1, 0, }
";

    #[test]
    fn golden_trace() {
        let _ = env_logger::try_init();
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), GOLDEN);
    }
}
