/// Items waiting for a point in time, measured in milliseconds.
///
/// Entries with equal due times come out in the order they were pushed.
#[derive(Debug)]
pub struct Schedule<T> {
    entries: Vec<(f64, T)>,
}

impl<T> Default for Schedule<T> {
    fn default() -> Schedule<T> {
        Schedule {
            entries: Vec::new(),
        }
    }
}

impl<T> Schedule<T> {
    pub fn new() -> Schedule<T> {
        Schedule::default()
    }

    pub fn push(&mut self, due: f64, item: T) {
        let index = self.entries.partition_point(|(at, _)| *at <= due);
        self.entries.insert(index, (due, item));
    }

    /// Removes and returns every item due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: f64) -> Vec<T> {
        let index = self.entries.partition_point(|(at, _)| *at <= now);
        self.entries.drain(..index).map(|(_, item)| item).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_only_due_items_in_order() {
        let mut schedule = Schedule::new();
        schedule.push(30.0, 'c');
        schedule.push(10.0, 'a');
        schedule.push(20.0, 'b');

        assert_eq!(schedule.take_due(5.0), Vec::<char>::new());
        assert_eq!(schedule.take_due(20.0), vec!['a', 'b']);
        assert!(!schedule.is_empty());
        assert_eq!(schedule.take_due(100.0), vec!['c']);
        assert!(schedule.is_empty());
    }

    #[test]
    fn equal_due_times_keep_push_order() {
        let mut schedule = Schedule::new();
        schedule.push(0.0, 1);
        schedule.push(0.0, 2);
        schedule.push(0.0, 3);

        assert_eq!(schedule.take_due(0.0), vec![1, 2, 3]);
    }
}
