use error::StackError;

use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T, next: Link<T>) -> Self {
        Self { value, next }
    }
}

/// LIFO stack over a singly linked chain of boxed nodes.
///
/// `head` plays the role of the sentinel: it never carries a value, and its
/// link always points at the current top. Each node owns its successor, so
/// releasing a node is just dropping the box that was unlinked.
pub struct Stack<T> {
    head: Link<T>,
    size: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Pushes `value` on top. The previous top becomes the second element.
    pub fn insert(&mut self, value: T) {
        let node = Box::new(Node::new(value, self.head.take()));
        self.head = Some(node);
        self.size += 1;
        trace!("inserted node, size = {}", self.size);
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Unlinks the top node and moves its value out, or `None` if empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.size -= 1;
            trace!("popped node, size = {}", self.size);
            value
        })
    }

    pub fn checked_pop(&mut self) -> Result<T, StackError> {
        self.try_pop().ok_or_else(|| StackError::empty("pop"))
    }

    fn values<'a>(&'a self) -> Values<'a, T> {
        Values {
            next: self.head.as_ref().map(|node| &**node),
        }
    }
}

impl<T: Clone> Stack<T> {
    pub fn checked_top(&self) -> Result<T, StackError> {
        self.peek().cloned().ok_or_else(|| StackError::empty("top"))
    }
}

impl<T: Default> Stack<T> {
    /// Removes and returns the top value.
    ///
    /// An empty stack is left untouched and `T::default()` is returned, so a
    /// popped default is indistinguishable from an empty stack. Check `size`
    /// first, or use `try_pop`/`checked_pop`.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(value) => value,
            None => {
                debug!("pop on empty stack, returning default");
                T::default()
            }
        }
    }
}

impl<T: Default + Clone> Stack<T> {
    /// Returns a copy of the top value, or `T::default()` if empty.
    pub fn top(&self) -> T {
        match self.peek() {
            Some(value) => value.clone(),
            None => {
                debug!("top on empty stack, returning default");
                T::default()
            }
        }
    }
}

impl<T: fmt::Display> Stack<T> {
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "Stack: {{")?;
        for value in self.values() {
            write!(f, "{}, ", value)?;
        }
        write!(f, "}}")
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T> Drop for Stack<T> {
    // Unlink nodes one at a time; dropping the head box directly would recurse
    // once per node.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.size = 0;
    }
}

struct Values<'a, T: 'a> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_ref().map(|next| &**next);
            &node.value
        })
    }
}
