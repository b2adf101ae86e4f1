//! Static word pools sampled by the generators.
//!
//! Every pool is non-empty and every token is non-empty, so drawing from a
//! lexicon pool and capitalizing the result never fails.

/// Adjectives used for usernames and email local parts.
pub const ADJECTIVES: &[&str] = &[
    "heartbreaking",
    "fluttering",
    "clammy",
    "rebel",
    "taboo",
    "lavish",
    "several",
    "dramatic",
    "similar",
    "onerous",
    "ugliest",
    "dependent",
    "understood",
    "fabulous",
    "rare",
    "needy",
    "hellish",
    "equable",
    "oafish",
    "meaty",
    "proud",
    "ossified",
    "itchy",
    "faulty",
    "unnatural",
    "gleaming",
    "awake",
    "loving",
    "abstracted",
    "petite",
    "racial",
    "ultra",
    "periodic",
    "evanescent",
    "traditional",
    "stingy",
    "phobic",
    "befitting",
    "lush",
    "tiresome",
    "abnormal",
    "torpid",
    "young",
    "emotional",
    "piquant",
    "nippy",
    "ritzy",
    "tan",
    "limping",
];

/// Given names used for usernames.
pub const NAMES: &[&str] = &[
    "Winston",
    "Presley",
    "Taniyah",
    "Arjun",
    "Kolby",
    "Trevin",
    "Kamari",
    "Makena",
    "Myah",
    "Mira",
    "Harrison",
    "Aaden",
    "Nicole",
    "Bernard",
    "Jason",
    "Holden",
    "Kane",
    "Melanie",
    "Jovani",
    "Matthias",
    "Emma",
    "Katelynn",
    "Kaylin",
    "Jordyn",
    "Raphael",
    "Amya",
    "Jaylynn",
    "Rachael",
    "Kassandra",
    "Rigoberto",
    "Jocelyn",
    "Aleah",
    "Yazmin",
    "Destiney",
    "Simeon",
    "Stacy",
    "Athena",
    "Mariana",
    "Maeve",
    "Raegan",
    "Elle",
    "Pedro",
    "Danny",
    "Reece",
    "Noe",
    "Brady",
    "Emely",
    "Ashtyn",
    "Lillie",
    "Lewis",
];

/// Default symbols spliced into usernames when symbols are enabled.
pub const SYMBOLS: &[&str] = &["_", ".", "@", "-"];

/// Decimal digits for numeric username suffixes.
pub const DIGITS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// ASCII letters, uppercase then lowercase, used to pad short usernames.
pub const LETTERS: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
    "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
];

/// Default email domain labels (without the `.com` suffix).
pub const EMAIL_DOMAINS: &[&str] = &["gmail", "yahoo"];
