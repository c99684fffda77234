/// Single-open accordion. Opening one entry closes whichever was open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;

    #[test]
    fn test_opening_another_entry_closes_the_first() {
        assert_eq!(FAQS.len(), 4);
        let mut accordion = Accordion::default();
        accordion.toggle(1);
        accordion.toggle(3);
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(3));
        let open: Vec<usize> = (0..FAQS.len()).filter(|i| accordion.is_open(*i)).collect();
        assert_eq!(open, vec![3]);
    }

    #[test]
    fn test_toggle_same_entry_closes_it() {
        let mut accordion = Accordion::default();
        assert_eq!(accordion.open_index(), None);
        accordion.toggle(2);
        accordion.toggle(2);
        assert_eq!(accordion.open_index(), None);
    }
}
