//! Starter catalog loaded at startup.

use bricklog_domain::id::LegoSetId;
use bricklog_domain::lego_set::LegoSet;
use bricklog_domain::time::{Timestamp, midnight};

#[allow(clippy::too_many_arguments)]
fn entry(
    id: u64,
    set_number: &str,
    name: &str,
    pieces: u32,
    price: f64,
    age_range: &str,
    theme: &str,
    release_year: u16,
    image_text: &str,
    listed: Timestamp,
) -> LegoSet {
    LegoSet {
        id: LegoSetId::new(id),
        set_number: set_number.to_string(),
        name: name.to_string(),
        pieces,
        price,
        age_range: age_range.to_string(),
        theme: theme.to_string(),
        release_year,
        image_url: format!("https://placehold.co/600x400/000000/FFFFFF/png?text={image_text}"),
        created_at: listed,
        updated_at: listed,
    }
}

/// The five sets every fresh catalog starts with, identifiers `1` to `5`.
#[must_use]
pub fn initial_lego_sets() -> Vec<LegoSet> {
    vec![
        entry(
            1,
            "75192",
            "Millennium Falcon",
            7541,
            159.99,
            "16+",
            "Star Wars",
            2017,
            "Millennium+Falcon",
            midnight(2017, 10, 1),
        ),
        entry(
            2,
            "71043",
            "Hogwarts Castle",
            6020,
            399.99,
            "16+",
            "Harry Potter",
            2018,
            "Hogwarts+Castle",
            midnight(2018, 9, 1),
        ),
        entry(
            3,
            "10294",
            "LEGO Creator Expert Titanic",
            9090,
            629.99,
            "18+",
            "Creator Expert",
            2021,
            "Titanic",
            midnight(2021, 11, 1),
        ),
        entry(
            4,
            "75313",
            "AT-AT",
            6785,
            159.99,
            "16+",
            "Star Wars",
            2021,
            "AT-AT",
            midnight(2021, 11, 1),
        ),
        entry(
            5,
            "10276",
            "Colosseum",
            9036,
            549.99,
            "18+",
            "Architecture",
            2020,
            "Colosseum",
            midnight(2020, 11, 1),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_seed_five_sets_with_sequential_ids() {
        let sets = initial_lego_sets();
        let ids: Vec<u64> = sets.iter().map(|set| set.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn should_seed_unique_set_numbers() {
        let sets = initial_lego_sets();
        let numbers: HashSet<&str> = sets.iter().map(|set| set.set_number.as_str()).collect();
        assert_eq!(numbers.len(), sets.len());
    }

    #[test]
    fn should_build_placeholder_image_urls() {
        let sets = initial_lego_sets();
        assert_eq!(
            sets[0].image_url,
            "https://placehold.co/600x400/000000/FFFFFF/png?text=Millennium+Falcon"
        );
        assert_eq!(sets[0].created_at, sets[0].updated_at);
    }
}
