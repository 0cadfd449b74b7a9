/// Dates currently marked by the drag gesture
///
/// Membership is what matters; insertion order is kept only so the bulk
/// update body lists dates in the order the user touched them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    dates: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the date if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, date: &str) -> bool {
        if let Some(pos) = self.dates.iter().position(|d| d == date) {
            self.dates.remove(pos);
            false
        } else {
            self.dates.push(date.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.dates.clear();
    }

    pub fn contains(&self, date: &str) -> bool {
        self.dates.iter().any(|d| d == date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dates.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.dates.clone()
    }
}
