#[derive(Fail, Debug, Clone, PartialEq)]
pub enum StackError {
    #[fail(display = "Cannot {} on an empty stack", operation)]
    Empty { operation: &'static str },
}

impl StackError {
    pub fn empty(operation: &'static str) -> Self {
        StackError::Empty { operation }
    }
}
