//! Cosine similarity between two users' rating maps.

use data_loader::UserRatings;

/// Cosine similarity of two rating maps.
///
/// The vectors live in the space of every course either user rated, with
/// unrated courses counted as 0. Padding with zeros adds nothing to either
/// norm or to the dot product, so only the shared courses enter the dot
/// product. Returns 0.0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &UserRatings, b: &UserRatings) -> f64 {
    let norm_a = a.values().map(|r| r * r).sum::<f64>().sqrt();
    let norm_b = b.values().map(|r| r * r).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Iterate the smaller map, probe the larger one
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(course_id, r)| large.get(course_id).map(|other| r * other))
        .sum();

    dot / (norm_a * norm_b)
}
