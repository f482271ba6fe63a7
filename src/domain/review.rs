// ============================================================
// Layer 3 — Review Domain Type
// ============================================================
// The typed form of one line of the reference review dataset.
// The loader itself is schema-less; this struct is what a row
// turns into once the caller knows it is looking at reviews.
//
// Example line:
//   {"reviewerID": "A2HD75EMZR8QLN", "asin": "0700099867",
//    "reviewerName": "123", "helpful": [8, 12],
//    "reviewText": "Installing the game was a struggle...",
//    "overall": 1.0, "summary": "Pay to unlock content? I don't think so.",
//    "unixReviewTime": 1341792000, "reviewTime": "07 9, 2012"}
//
// Reference: Rust Book §5 (Structs)
//            serde field attributes documentation

use serde::{Deserialize, Serialize};

/// Column names of the reference dataset, in file order.
pub const REVIEW_COLUMNS: [&str; 9] = [
    "reviewerID",
    "asin",
    "reviewerName",
    "helpful",
    "reviewText",
    "overall",
    "summary",
    "unixReviewTime",
    "reviewTime",
];

/// One product review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "reviewerID")]
    pub reviewer_id: String,

    pub asin: String,

    /// Some reviewers have no display name
    #[serde(rename = "reviewerName", default)]
    pub reviewer_name: Option<String>,

    /// [helpful votes, total votes]
    #[serde(default)]
    pub helpful: Vec<u64>,

    #[serde(rename = "reviewText", default)]
    pub review_text: String,

    /// Star rating, 1.0 to 5.0
    pub overall: f64,

    #[serde(default)]
    pub summary: String,

    #[serde(rename = "unixReviewTime")]
    pub unix_review_time: i64,

    #[serde(rename = "reviewTime", default)]
    pub review_time: String,

    /// Present once the row has been labeled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<bool>,
}

impl Review {
    /// Fraction of voters who found the review helpful, if anyone voted.
    pub fn helpful_ratio(&self) -> Option<f64> {
        match self.helpful.as_slice() {
            [yes, total] if *total > 0 => Some(*yes as f64 / *total as f64),
            _ => None,
        }
    }
}
