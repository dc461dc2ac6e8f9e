const FRAMES: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

/// Decorative spinner advanced by tick events. Lives in the UI loop only.
#[derive(Debug, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn current(&self) -> char {
        FRAMES[self.frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        let mut spinner = Spinner::default();
        let first = spinner.current();
        spinner.tick();
        assert_ne!(spinner.current(), first);
        for _ in 1..FRAMES.len() {
            spinner.tick();
        }
        assert_eq!(spinner.current(), first);
    }
}
