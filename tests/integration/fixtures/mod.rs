// Transcript fixtures in the Europarl markup style
// WHY: Known speaker/chapter layouts make the expected speaker of every sentence obvious
#![allow(dead_code)]

/// Session opening: front matter, then two speaker turns
pub const SESSION_OPENING: &[&str] = &[
    "<CHAPTER ID=1>",
    "Wiederaufnahme der Sitzungsperiode",
    r#"<SPEAKER ID=1 NAME="Die Präsidentin" LANGUAGE="DE">"#,
    "Ich erkläre die am Freitag, dem 17. Dezember unterbrochene Sitzungsperiode für wieder aufgenommen.",
    "Wie Sie feststellen konnten, ist der gefürchtete Millenium-Bug nicht eingetreten.",
    r#"<SPEAKER ID=2 NAME="Evans, Robert J" LANGUAGE="EN">"#,
    "Frau Präsidentin, zur Geschäftsordnung.",
];

/// Second session: a new chapter and a speaker without a language attribute
pub const SESSION_AGENDA: &[&str] = &[
    "<CHAPTER ID=2>",
    "Arbeitsplan",
    r#"<SPEAKER ID=7 NAME="Lynne">"#,
    "Vielen Dank, Frau Präsidentin.",
    "<CHAPTER ID=3>",
    "Abstimmungen",
];

/// Primary (German) sentences in corpus order, with typical aligner noise
pub const PRIMARY: &[&str] = &[
    " Ich erkläre die am Freitag, dem 17. Dezember unterbrochene Sitzungsperiode für wieder aufgenommen.",
    "Wie Sie feststellen konnten, ist der gefürchtete Millenium-Bug nicht eingetreten.",
    "Frau Präsidentin, zur Geschäftsordnung.",
    "Dieser Satz steht nirgendwo.",
    "Vielen Dank, Frau Präsidentin.",
    "Arbeitsplan",
];

/// Secondary (English) sentences aligned with PRIMARY
pub const SECONDARY: &[&str] = &[
    "I declare resumed the session of the European Parliament adjourned on Friday 17 December 1999.",
    "As you will have noticed, the dreaded 'millennium bug' failed to materialise.",
    "Madam President, on a point of order.",
    "This sentence is nowhere.",
    "Thank you, Madam President.",
    "Agenda",
];
