//! Property tests for the glyph planner.
//!
//! 1. Fade plans always spell their word back (nothing dropped or doubled)
//! 2. A word followed by itself tracks every glyph
//! 3. Words with no characters in common share nothing
//! 4. Shared glyphs exist, by tag, in both words
//! 5. Runs are maximal: no two runs sit next to each other

use std::collections::HashSet;

use proptest::prelude::*;
use text_morph::glyph::tag;
use text_morph::solver;
use text_morph::Token;

// ── Strategies ──────────────────────────────────────────────────────────

/// Small alphabets so repeated letters are common.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd', 'é', '日']), 0..12)
        .prop_map(|chars| chars.into_iter().collect())
}

fn word_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 2..6)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn plans_spell_their_word(words in word_list_strategy()) {
        let plans = solver::plan(&words).unwrap();

        for (i, word) in words.iter().enumerate() {
            prop_assert_eq!(&plans.fade_in(i).text(), word);
            prop_assert_eq!(&plans.fade_out(i).text(), word);
            prop_assert_eq!(&plans.intro(i).text(), word);
        }
    }

    #[test]
    fn self_match_is_total(word in word_strategy()) {
        let plans = solver::plan(&[word.clone(), word.clone()]).unwrap();

        prop_assert_eq!(plans.shared(0).len(), word.chars().count());
        prop_assert!(plans.fade_out(0).iter().all(|t| matches!(t, Token::Glyph(_))));
    }

    #[test]
    fn disjoint_words_share_nothing(len_a in 1usize..8, len_b in 1usize..8) {
        let a: String = "ab".chars().cycle().take(len_a).collect();
        let b: String = "xy".chars().cycle().take(len_b).collect();
        let plans = solver::plan(&[a.clone(), b]).unwrap();

        prop_assert!(plans.shared(0).is_empty());
        prop_assert_eq!(plans.fade_out(0).tokens.clone(), vec![Token::Run(a)]);
    }

    #[test]
    fn shared_glyphs_exist_in_both_words(words in word_list_strategy()) {
        let plans = solver::plan(&words).unwrap();
        let n = words.len();

        for i in 0..n {
            let here: HashSet<_> = tag(&words[i]).into_iter().collect();
            let next: HashSet<_> = tag(&words[(i + 1) % n]).into_iter().collect();
            let expected: HashSet<_> = here.intersection(&next).copied().collect();
            let actual: HashSet<_> = plans.shared(i).keys().copied().collect();

            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn runs_are_never_adjacent(words in word_list_strategy()) {
        let plans = solver::plan(&words).unwrap();

        for i in 0..words.len() {
            for plan in [plans.fade_in(i), plans.fade_out(i)] {
                for pair in plan.tokens.windows(2) {
                    prop_assert!(
                        !matches!(pair, [Token::Run(_), Token::Run(_)]),
                        "adjacent runs in {:?}",
                        plan
                    );
                }

                prop_assert!(plan.iter().all(|t| !matches!(t, Token::Run(r) if r.is_empty())));
            }
        }
    }
}
