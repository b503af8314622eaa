use log::debug;
use rand::Rng;

use crate::karen::mood::Mood;

// Which pool a turn draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Intro,
    Contextual,
    Fallback,
}

impl ResponseKind {
    pub fn for_turn(is_intro: bool, last_user_response: Option<&str>) -> Self {
        if is_intro {
            return ResponseKind::Intro;
        }
        match last_user_response {
            Some(text) if !text.is_empty() => ResponseKind::Contextual,
            _ => ResponseKind::Fallback,
        }
    }
}

// Picks one line uniformly from the pool that fits the turn.
// The caller's words only decide the category, never the text itself.
pub fn select<R: Rng>(
    mood: Mood,
    is_intro: bool,
    last_user_response: Option<&str>,
    rng: &mut R,
) -> &'static str {
    let pools = mood.pools();
    match ResponseKind::for_turn(is_intro, last_user_response) {
        ResponseKind::Intro => *pools.intro.choose(rng),
        ResponseKind::Contextual => *pools.contextual.choose(rng),
        ResponseKind::Fallback => {
            let (theme, line) = pools.fallback_line(rng.gen_range(0..pools.fallback_len()));
            debug!("{} fallback line ({})", mood, theme);
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const DRAWS: usize = 1000;

    fn draw_all(mood: Mood, is_intro: bool, last: Option<&str>) -> HashSet<&'static str> {
        let mut rng = StdRng::seed_from_u64(7);
        (0..DRAWS)
            .map(|_| select(mood, is_intro, last, &mut rng))
            .collect()
    }

    #[test]
    fn kind_follows_priority_order() {
        assert_eq!(ResponseKind::for_turn(true, Some("hello")), ResponseKind::Intro);
        assert_eq!(ResponseKind::for_turn(true, None), ResponseKind::Intro);
        assert_eq!(ResponseKind::for_turn(false, Some("hello")), ResponseKind::Contextual);
        assert_eq!(ResponseKind::for_turn(false, Some("   ")), ResponseKind::Contextual);
        assert_eq!(ResponseKind::for_turn(false, Some("")), ResponseKind::Fallback);
        assert_eq!(ResponseKind::for_turn(false, None), ResponseKind::Fallback);
    }

    #[test]
    fn whitespace_reply_still_draws_contextual_lines() {
        for mood in Mood::ALL {
            let seen = draw_all(mood, false, Some("   "));
            assert!(
                seen.iter().all(|line| mood.pools().contextual.contains(line)),
                "{} whitespace reply drew a non-contextual line",
                mood
            );
        }
    }

    #[test]
    fn intro_ignores_user_response() {
        for mood in Mood::ALL {
            let seen = draw_all(mood, true, Some("I'd like a refund"));
            assert!(seen.iter().all(|line| mood.pools().intro.contains(line)));
            assert!(seen.len() > 1);
        }
    }

    #[test]
    fn user_response_draws_contextual_lines() {
        for mood in Mood::ALL {
            let seen = draw_all(mood, false, Some("Sorry ma'am"));
            assert!(seen.iter().all(|line| mood.pools().contextual.contains(line)));
            assert!(seen.len() > 1);
        }
    }

    #[test]
    fn no_user_response_draws_fallback_lines() {
        for mood in Mood::ALL {
            let pools = mood.pools();
            for last in [None, Some("")] {
                let seen = draw_all(mood, false, last);
                assert!(seen.iter().all(|line| pools.fallback_lines().any(|l| l == *line)));
                assert!(seen.len() > 1);
            }
        }
    }

    #[test]
    fn fallback_covers_every_theme() {
        let seen = draw_all(Mood::Angry, false, None);
        for group in Mood::Angry.pools().fallback.iter() {
            assert!(
                group.lines.lines().any(|line| seen.contains(line)),
                "no line drawn from '{}'",
                group.theme
            );
        }
    }

    #[test]
    fn fixed_rng_picks_exact_lines() {
        // An all-zero source always lands on the first entry of a pool
        let mut zero = StepRng::new(0, 0);
        assert_eq!(
            select(Mood::Happy, true, None, &mut zero),
            "Oh my goodness, you're just the sweetest thing!"
        );
        assert_eq!(
            select(Mood::Crazy, false, Some("hi"), &mut zero),
            "That's EXACTLY what the lizard people told me you'd say!"
        );
        assert_eq!(
            select(Mood::Angry, false, None, &mut zero),
            "I'm getting more frustrated by the second, and believe me, you don't want to see me angry!"
        );

        // 2^61 scaled onto eight lines is exactly index 1
        let mut eighth = StepRng::new(1 << 61, 0);
        assert_eq!(
            select(Mood::Angry, false, Some("hi"), &mut eighth),
            "Are you SERIOUSLY trying to tell me that?! This is the WORST customer service I have EVER experienced!"
        );
    }

    #[test]
    fn same_seed_gives_same_line() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                select(Mood::Crazy, false, Some("hi"), &mut a),
                select(Mood::Crazy, false, Some("hi"), &mut b)
            );
        }
    }
}
