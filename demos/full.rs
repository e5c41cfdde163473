//! A more fully-fledged example, showcasing the per-insertion medians and the
//! other methods on [`RunningMedian`]

use running_median::{running_medians, RunningMedian};

/// Some sample data to calculate the median for
///
/// In practice, this will probably be a much larger stream
const DATA: [i64; 8] = [5, 15, 1, 3, 2, 8, 7, 9];

fn main() {
    let mut tracker = RunningMedian::new();

    // Before anything is inserted, there is no median to report
    assert!(tracker.is_empty());
    assert_eq!(tracker.median(), None);

    // Read data points from our data source, and fold them into the tracker
    for data_point in DATA {
        tracker.insert(data_point);

        // After each insertion, the median of everything seen so far is
        // available immediately
        let median = tracker.median().expect("at least one value was inserted");
        println!(
            "After {} values, the running median is {median}",
            tracker.count()
        );
    }

    // The same per-insertion sequence is available in one shot
    let medians = running_medians(DATA);
    println!("All running medians at once: {medians:?}");
}
