#![no_main]

use libfuzzer_sys::fuzz_target;
use datesort::{Context, Date, Policy};

fuzz_target!(|data: &[u8]| {

    let dates: Vec<Date> = data
        .chunks(2)
        .map(|c| {
            let days = u16::from_le_bytes([c[0], *c.get(1).unwrap_or(&0)]);
            Date::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(i64::from(days))
        })
        .collect();
    let len = dates.len();

    let mut context = Context::new();
    context.set_dates(dates);
    Policy::new(&mut context).configure();
    context.sort();

    let sorted = context.dates().unwrap();
    assert_eq!(sorted.len(), len);
    for window in sorted.windows(2) {
        assert!(window[0] <= window[1]);
    }

});
