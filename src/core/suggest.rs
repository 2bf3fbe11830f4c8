use crate::domain::model::{Candidate, CandidateList};

/// Every candidate whose `"label tag"` text contains `term`, ignoring case,
/// in list order. An empty term matches everything.
pub fn filter_candidates(candidates: &CandidateList, term: &str) -> Vec<Candidate> {
    let term = term.to_lowercase();

    candidates
        .iter()
        .filter(|candidate| candidate.search_text().to_lowercase().contains(&term))
        .cloned()
        .collect()
}
