// Canned lines for every mood: intro, contextual replies and themed fallbacks.
// Every pool and every fallback group holds at least one entry.

use rand::Rng;

pub struct NonEmpty<T: 'static> {
    first: T,
    rest: &'static [T],
}

macro_rules! non_empty {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        NonEmpty {
            first: $first,
            rest: &[$($rest),*],
        }
    };
}

impl<T: 'static> NonEmpty<T> {
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.first),
            i => self.rest.get(i - 1),
        }
    }

    pub fn last(&self) -> &T {
        self.rest.last().unwrap_or(&self.first)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn choose<R: Rng>(&self, rng: &mut R) -> &T {
        self.get(rng.gen_range(0..self.len())).unwrap_or(&self.first)
    }
}

impl NonEmpty<&'static str> {
    pub fn lines(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().copied()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.iter().any(|l| *l == line)
    }
}

pub type Lines = NonEmpty<&'static str>;

pub struct FallbackGroup {
    pub theme: &'static str,
    pub lines: Lines,
}

pub struct ResponsePools {
    pub intro: Lines,
    pub contextual: Lines,
    pub fallback: NonEmpty<FallbackGroup>,
}

impl ResponsePools {
    pub fn fallback_len(&self) -> usize {
        self.fallback.iter().map(|group| group.lines.len()).sum()
    }

    // Flattened index into the fallback groups, with the group's theme.
    // Indices past the end clamp to the last line.
    pub fn fallback_line(&self, mut index: usize) -> (&'static str, &'static str) {
        for group in self.fallback.iter() {
            if let Some(line) = group.lines.get(index) {
                return (group.theme, *line);
            }
            index -= group.lines.len();
        }
        let group = self.fallback.last();
        (group.theme, *group.lines.last())
    }

    pub fn fallback_lines(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fallback.iter().flat_map(|group| group.lines.lines())
    }
}

pub static ANGRY: ResponsePools = ResponsePools {
    intro: non_empty![
        "I can't believe how incompetent this service is!",
        "I demand to speak to your manager RIGHT NOW!",
        "Do you know how much money I spend here?",
        "This is absolutely UNACCEPTABLE!",
    ],
    contextual: non_empty![
        "OH. MY. GOD. I cannot BELIEVE what I'm hearing! You people are COMPLETELY USELESS!",
        "Are you SERIOUSLY trying to tell me that?! This is the WORST customer service I have EVER experienced!",
        "I am literally SHAKING right now! Do you have ANY IDEA who I am?!",
        "EXCUSE ME?! I've been a customer for 15 YEARS and THIS is how you treat me?!",
        "This is RIDICULOUS! My CHILDREN could provide better service than this!",
        "I am going to BLAST your company on EVERY social media platform! You'll be HEARING from my lawyer!",
        "*SCREAMING* I want your manager's manager's MANAGER! RIGHT! NOW!",
        "Oh, that's just PERFECT! Just PERFECT! I'm recording ALL of this for my YouTube channel!",
    ],
    fallback: non_empty![
        FallbackGroup {
            theme: "escalating frustration",
            lines: non_empty![
                "I'm getting more frustrated by the second, and believe me, you don't want to see me angry!",
                "This is absolutely ridiculous! I've never experienced such incompetence in my life!",
                "I can't believe this is happening! Do you people even know what you're doing?",
            ],
        },
        FallbackGroup {
            theme: "authority demands",
            lines: non_empty![
                "I demand to speak to your supervisor RIGHT NOW! This is beyond unacceptable!",
                "Get me your manager immediately! I won't stand for this level of service!",
                "Do you know who I am? I'm friends with the CEO of your competitor!",
            ],
        },
        FallbackGroup {
            theme: "time-based complaints",
            lines: non_empty![
                "I've been waiting for 45 minutes! This is absolutely outrageous!",
                "My time is valuable, and you're wasting it with your incompetence!",
                "I could've gone to your competitor and back THREE TIMES by now!",
            ],
        },
        FallbackGroup {
            theme: "status and loyalty appeals",
            lines: non_empty![
                "I've been a loyal customer for 15 years, and this is how you treat me?",
                "I spend thousands of dollars here every month! You can't treat me like this!",
                "Everyone in my social circle will hear about this terrible service!",
            ],
        },
        FallbackGroup {
            theme: "threats and ultimatums",
            lines: non_empty![
                "Fix this immediately, or I'm taking my business elsewhere!",
                "I'll have you know I have over 10,000 followers on social media!",
                "You'll be hearing from my lawyer about this! This is completely unacceptable!",
            ],
        },
        FallbackGroup {
            theme: "personal attacks",
            lines: non_empty![
                "Are you even trained for this job? Because it certainly doesn't seem like it!",
                "My ten-year-old could provide better service than this!",
                "I can't believe they let someone so incompetent handle customer service!",
            ],
        },
    ],
};

pub static HAPPY: ResponsePools = ResponsePools {
    intro: non_empty![
        "Oh my goodness, you're just the sweetest thing!",
        "I love love LOVE your customer service!",
        "You're doing such an amazing job, honey!",
        "I'll definitely tell all my friends about this!",
    ],
    contextual: non_empty![
        "Oh my stars! The way you said that just makes me so happy!",
        "That is the most wonderful thing anyone has told me all week, sweetie!",
        "Oh, you are an absolute ANGEL! I'm writing your manager a thank-you card!",
        "See, THIS is why I always call you people first! You're simply the best!",
        "Goodness gracious, I could just hug you through the phone right now!",
        "Well aren't you a ray of sunshine! I'm giving you five stars, honey!",
    ],
    fallback: non_empty![
        FallbackGroup {
            theme: "gushing praise",
            lines: non_empty![
                "Everything is just wonderful, isn't it?",
                "You have the loveliest phone voice, has anyone ever told you that?",
                "I just knew today was going to be a good day!",
            ],
        },
        FallbackGroup {
            theme: "oversharing",
            lines: non_empty![
                "My book club is going to hear ALL about how helpful you've been!",
                "I baked cookies this morning, I wish I could send you some, dear!",
            ],
        },
    ],
};

pub static CRAZY: ResponsePools = ResponsePools {
    intro: non_empty![
        "The aliens told me your company is part of the conspiracy!",
        "I can see the matrix in your voice, you know...",
        "My pet psychic said this would happen!",
        "The government is listening to this call, I just know it!",
    ],
    contextual: non_empty![
        "That's EXACTLY what the lizard people told me you'd say!",
        "Interesting... very interesting... my tinfoil hat is tingling!",
        "You're reading from a script, aren't you? Blink twice if THEY are watching you!",
        "My cat predicted you would say that. She's never wrong. NEVER.",
        "Ha! That's what they WANT you to think! Wake up, sheeple!",
        "Hold on, I need to write that down in my conspiracy journal!",
    ],
    fallback: non_empty![
        FallbackGroup {
            theme: "voices",
            lines: non_empty![
                "The voices in my head agree with me on this one!",
                "Shh! Did you hear that? The voices are getting louder!",
            ],
        },
        FallbackGroup {
            theme: "conspiracies",
            lines: non_empty![
                "Birds aren't real and I have the receipts to prove it!",
                "I know your call center is on the moon. I KNOW IT.",
                "Why does your hold music sound like a secret code?",
            ],
        },
    ],
};
