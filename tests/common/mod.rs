//! Shared corpus fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// One training document per label. Hours and senders are chosen so that
/// test queries without a sender and with hour `77` only overlap on body and
/// subject features.
pub const TRAINING: [(&str, &str); 5] = [
    (
        "forums",
        ".I 1
.L 0
.F a@b.com
.S hello
.D Mon, 2 Jan 2006 09:00:00 +0000
.M
hi there
",
    ),
    (
        "personal",
        ".I 1
.L 1
.F Mom <mom@family.example>
.S dinner
.D Mon, 2 Jan 2006 18:30:00 +0000
.M
see you at dinner tonight
",
    ),
    (
        "promotions",
        ".I 1
.L 2
.F Deals <deals@shop.example>
.S weekend sale
.D Sat, 7 Jan 2006 10:15:00 +0000
.M
huge savings http://shop.example/sale
",
    ),
    (
        "social",
        ".I 1
.L 3
.F notify@social.example
.S new follower
.D Sun, 8 Jan 2006 21:45:00 +0000
.M
someone followed you
",
    ),
    (
        "updates",
        ".I 1
.L 4
.F billing@service.example
.S your receipt
.D Tue, 3 Jan 2006 06:00:00 +0000
.M
payment received thanks
",
    ),
];

/// Labeled test corpus: a promotion carrying a link, a forum post matching
/// the forums subject, and an unlabeled document.
pub const TEST_SET: &str = ".I 1
.L 2
.D Wed, 4 Jan 2006 77:00:00 +0000
.M
check http://other.example/offer
.I 2
.L 0
.S hello
.D Wed, 4 Jan 2006 77:00:00 +0000
.M
.I 3
.D Wed, 4 Jan 2006 77:00:00 +0000
.M
payment received
";

/// Write the training corpora and test set into `dir`.
pub fn write_fixture(dir: &Path) -> (Vec<PathBuf>, PathBuf) {
    let training = TRAINING
        .iter()
        .map(|(name, text)| {
            let path = dir.join(format!("{name}.txt"));
            fs::write(&path, text).unwrap();
            path
        })
        .collect();
    let test = dir.join("test_set.txt");
    fs::write(&test, TEST_SET).unwrap();
    (training, test)
}
