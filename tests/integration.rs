use indoc::indoc;
use once_cell::sync::Lazy;
use profanity_filter::{CensorMode, Location, ProfanityFilter, ProfanityFilterBuilder};
use std::thread;

static DEFAULT: Lazy<ProfanityFilter> = Lazy::new(ProfanityFilter::new);

static EMPTY: Lazy<ProfanityFilter> = Lazy::new(|| {
    ProfanityFilterBuilder::new()
        .set_bad_words(Vec::<&str>::new())
        .build()
        .unwrap()
});

static FOX: Lazy<ProfanityFilter> = Lazy::new(|| {
    ProfanityFilterBuilder::new()
        .set_bad_words(["fox"])
        .build()
        .unwrap()
});

static FOX_AND_DOG: Lazy<ProfanityFilter> = Lazy::new(|| {
    ProfanityFilterBuilder::new()
        .set_bad_words(["fox", "dog"])
        .build()
        .unwrap()
});

static ALLOWED: Lazy<ProfanityFilter> = Lazy::new(|| {
    ProfanityFilterBuilder::new()
        .set_bad_words(["fox", "dog"])
        .allow_words(["fox", "dog"])
        .build()
        .unwrap()
});

static SIMILAR_FOX: Lazy<ProfanityFilter> = Lazy::new(|| {
    ProfanityFilterBuilder::new()
        .set_bad_words(["fox"])
        .use_similarity_detection()
        .build()
        .unwrap()
});

static PHRASE: Lazy<ProfanityFilter> = Lazy::new(|| {
    ProfanityFilterBuilder::new()
        .set_bad_words(["lazy dog"])
        .build()
        .unwrap()
});

const SENTENCE: &str = "The quick brown fox jumps over the lazy dog";

#[test]
fn censor_no_bad_words() {
    assert_eq!(EMPTY.censor(SENTENCE), SENTENCE);
    assert!(!EMPTY.contains_profanity(SENTENCE));
}

#[test]
fn censor_one_bad_word() {
    assert_eq!(
        FOX.censor(SENTENCE),
        "The quick brown *** jumps over the lazy dog"
    );
}

#[test]
fn censor_multiple_bad_words() {
    assert_eq!(
        FOX_AND_DOG.censor(SENTENCE),
        "The quick brown *** jumps over the lazy ***"
    );
}

#[test]
fn censor_allowed_words() {
    assert_eq!(ALLOWED.censor(SENTENCE), SENTENCE);
    assert!(!ALLOWED.contains_profanity("fox"));
}

#[test]
fn censor_similar_words() {
    assert_eq!(
        SIMILAR_FOX.censor("The quick brown foox jumps over the lazy horse"),
        "The quick brown **** jumps over the lazy horse"
    );
}

#[test]
fn similar_words_beyond_threshold() {
    assert!(!SIMILAR_FOX.contains_profanity("wolves"));
}

#[test]
fn censor_default_words() {
    assert_eq!(
        DEFAULT.censor("you have fucking a big a s shole"),
        "you have ******* a big *********"
    );
}

#[test]
fn contains_profanity() {
    assert!(DEFAULT.contains_profanity("hello fuckers"));
    assert!(!DEFAULT.contains_profanity("hello friends"));
}

#[test]
fn find_profanities() {
    let matches = DEFAULT.find_profanities("hello fuckers how the fuck are you?");

    assert_eq!(matches.get("fuckers"), Some([Location::new(6, 7)].as_slice()));
    assert_eq!(matches.get("fuck"), Some([Location::new(22, 4)].as_slice()));
}

#[test]
fn find_nothing() {
    assert!(DEFAULT.find("hello friends").is_empty());
}

#[test]
fn case_insensitive() {
    let matches = FOX.find("FOX Fox fox");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches.get("fox").map(<[Location]>::len), Some(3));
    assert_eq!(FOX.censor("FOX Fox fox"), "*** *** ***");
}

#[test]
fn phrase() {
    let matches = PHRASE.find(SENTENCE);

    assert_eq!(matches.get("lazy dog"), Some([Location::new(35, 8)].as_slice()));
    assert_eq!(
        PHRASE.censor(SENTENCE),
        "The quick brown fox jumps over the ********"
    );
}

#[test]
fn censor_is_idempotent() {
    let censored = FOX_AND_DOG.censor(SENTENCE);

    assert_eq!(FOX_AND_DOG.censor(&censored), censored);
}

#[test]
fn censor_preserves_length() {
    let input = "ãã fox bãr";

    assert_eq!(FOX.censor(input).chars().count(), input.chars().count());
    assert_eq!(FOX.censor(input), "ãã *** bãr");
}

#[test]
fn censor_multiple_lines() {
    assert_eq!(
        FOX_AND_DOG.censor(indoc! {"
            The fox,
            the dog,
            and the Fox again.
        "}),
        indoc! {"
            The ***,
            the ***,
            and the *** again.
        "}
    );
}

#[test]
fn censor_with_custom_mask() {
    assert_eq!(FOX.censor_with("fox", '#'), "###");

    let filter = ProfanityFilterBuilder::new()
        .set_bad_words(["fox"])
        .censor_mode(CensorMode::ReplaceAllWith('-'))
        .build()
        .unwrap();
    assert_eq!(filter.censor("a fox"), "a ---");
}

#[test]
fn configure_append_bad_words() {
    let filter = ProfanityFilterBuilder::new()
        .append_bad_words(["toast"])
        .build()
        .unwrap();

    assert!(filter.contains_profanity("toast"));
    assert!(filter.contains_profanity("fuck"));
    assert!(!DEFAULT.contains_profanity("toast"));
}

#[test]
fn configure_allow_words() {
    let filter = ProfanityFilterBuilder::new()
        .allow_words(["fuck"])
        .build()
        .unwrap();

    assert!(!filter.contains_profanity("fuck"));
}

#[test]
fn configure_similarity_detection() {
    let filter = ProfanityFilterBuilder::new()
        .use_similarity_detection()
        .build()
        .unwrap();

    assert!(filter.contains_profanity("ffck"));
}

#[test]
fn configure_without_similarity_detection() {
    assert!(!DEFAULT.contains_profanity("ffck"));
}

#[test]
fn configure_set_bad_words() {
    let filter = ProfanityFilterBuilder::new()
        .set_bad_words(["toast", "fish"])
        .build()
        .unwrap();

    assert!(filter.contains_profanity("toast"));
    assert!(filter.contains_profanity("fish"));
    assert!(!filter.contains_profanity("fuck"));
}

#[test]
fn shared_between_threads() {
    let handles = (0..4)
        .map(|_| thread::spawn(|| FOX_AND_DOG.censor(SENTENCE)))
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            "The quick brown *** jumps over the lazy ***"
        );
    }
}
