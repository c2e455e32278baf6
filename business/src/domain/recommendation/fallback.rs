use super::model::Suggestion;

const FALLBACK_ENTRIES: [(&str, &str, [&str; 3]); 5] = [
    (
        "가벼운 산책하기",
        "신선한 공기를 마시며 기분을 전환해보세요.",
        ["야외", "운동", "기분전환"],
    ),
    (
        "따뜻한 차 한 잔",
        "좋아하는 차를 마시며 잠시 여유를 가져보세요.",
        ["실내", "휴식", "티타임"],
    ),
    (
        "좋아하는 음악 듣기",
        "기분에 맞는 음악 플레이리스트를 감상해보세요.",
        ["실내", "음악", "감성"],
    ),
    (
        "독서하기",
        "읽고 싶었던 책을 읽으며 마음의 양식을 쌓아보세요.",
        ["실내", "독서", "집중"],
    ),
    (
        "스트레칭",
        "굳어있는 몸을 풀어주며 활력을 되찾으세요.",
        ["실내", "운동", "건강"],
    ),
];

/// Fixed suggestions served whenever live recommendations are unavailable.
/// Independent of mood and weather.
pub fn fallback_catalog() -> Vec<Suggestion> {
    FALLBACK_ENTRIES
        .iter()
        .map(|(title, description, tags)| {
            Suggestion::new(
                *title,
                *description,
                tags.iter().map(|tag| tag.to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_contain_five_entries_in_fixed_order() {
        let catalog = fallback_catalog();

        let titles: Vec<&str> = catalog.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "가벼운 산책하기",
                "따뜻한 차 한 잔",
                "좋아하는 음악 듣기",
                "독서하기",
                "스트레칭",
            ]
        );
    }

    #[test]
    fn should_be_identical_across_calls() {
        assert_eq!(fallback_catalog(), fallback_catalog());
    }

    #[test]
    fn should_give_every_entry_three_tags() {
        assert!(fallback_catalog().iter().all(|s| s.tags.len() == 3));
    }
}
