//! The built-in list of filtered words.

/// Words filtered by a [`ProfanityFilter`] when no custom list is set.
///
/// Every entry is lowercase. Entries containing a space are matched as phrases.
///
/// [`ProfanityFilter`]: crate::ProfanityFilter
pub static DEFAULT_BAD_WORDS: &[&str] = &[
    "2g1c",
    "2 girls 1 cup",
    "a s shole",
    "acrotomophilia",
    "anal",
    "analsex",
    "anilingus",
    "anus",
    "arse",
    "arsehole",
    "ass",
    "assbag",
    "assbandit",
    "asses",
    "assfuck",
    "asshat",
    "asshead",
    "asshole",
    "assholes",
    "asswhole",
    "assclown",
    "asswipe",
    "autoerotic",
    "b00bs",
    "ballbag",
    "ballsack",
    "bangbros",
    "bareback",
    "bastard",
    "bastards",
    "beastiality",
    "bestiality",
    "biatch",
    "bitch",
    "bitches",
    "bitching",
    "bitchy",
    "blow job",
    "blowjob",
    "blowjobs",
    "boiolas",
    "bollock",
    "bollocks",
    "boner",
    "boob",
    "boobs",
    "booobs",
    "breasts",
    "bugger",
    "bukkake",
    "bullshit",
    "bunghole",
    "butthole",
    "buttplug",
    "camel toe",
    "camgirl",
    "camwhore",
    "carpet muncher",
    "chinc",
    "chink",
    "choad",
    "circlejerk",
    "clit",
    "clitoris",
    "cock",
    "cockface",
    "cockhead",
    "cocks",
    "cocksucker",
    "cocksucking",
    "coon",
    "coprophilia",
    "crap",
    "cum",
    "cumming",
    "cumshot",
    "cunilingus",
    "cunnilingus",
    "cunt",
    "cunts",
    "damn",
    "deepthroat",
    "dick",
    "dickhead",
    "dicks",
    "dildo",
    "dildos",
    "dipshit",
    "doggystyle",
    "douche",
    "douchebag",
    "dumbass",
    "dyke",
    "ejaculate",
    "ejaculation",
    "erotic",
    "f4nny",
    "fag",
    "fagging",
    "faggot",
    "faggots",
    "fags",
    "fanny",
    "felching",
    "fellatio",
    "fingerfuck",
    "fisting",
    "fook",
    "fooker",
    "footjob",
    "fuck",
    "fucka",
    "fucked",
    "fucker",
    "fuckers",
    "fuckhead",
    "fuckin",
    "fucking",
    "fuckings",
    "fuckme",
    "fucks",
    "fuckwit",
    "fudgepacker",
    "fuk",
    "fuker",
    "fukker",
    "fukwit",
    "gangbang",
    "gangbanged",
    "goatse",
    "goddamn",
    "goddamned",
    "handjob",
    "hardcore",
    "hentai",
    "homo",
    "hooker",
    "horny",
    "incest",
    "jackass",
    "jackoff",
    "jerk off",
    "jerkoff",
    "jizz",
    "kike",
    "kinky",
    "knobend",
    "kunt",
    "labia",
    "lmfao",
    "masochist",
    "masturbate",
    "masturbating",
    "masturbation",
    "milf",
    "mofo",
    "molest",
    "motherfucker",
    "motherfuckers",
    "motherfucking",
    "muff",
    "nazi",
    "negro",
    "nigga",
    "niggas",
    "nigger",
    "niggers",
    "nipple",
    "nipples",
    "nude",
    "nudity",
    "nympho",
    "orgasm",
    "orgasms",
    "orgy",
    "paedophile",
    "paki",
    "pecker",
    "pedobear",
    "pedophile",
    "penis",
    "phuck",
    "phuk",
    "piss",
    "pissed",
    "pisser",
    "pissing",
    "porn",
    "porno",
    "pornography",
    "prick",
    "pricks",
    "pube",
    "pussies",
    "pussy",
    "queef",
    "raghead",
    "rape",
    "raping",
    "rapist",
    "rectum",
    "retard",
    "rimjob",
    "rimming",
    "sadism",
    "schlong",
    "scrotum",
    "semen",
    "sex",
    "sexy",
    "shemale",
    "shit",
    "shite",
    "shithead",
    "shits",
    "shitted",
    "shitter",
    "shitting",
    "shitty",
    "skank",
    "slut",
    "sluts",
    "slutty",
    "smegma",
    "sodomy",
    "spic",
    "spunk",
    "strap on",
    "swastika",
    "testicle",
    "threesome",
    "tit",
    "tits",
    "titties",
    "titty",
    "tosser",
    "tranny",
    "turd",
    "twat",
    "twats",
    "vagina",
    "vibrator",
    "vulva",
    "wank",
    "wanker",
    "wetback",
    "whore",
    "whores",
    "xxx",
];
