//! Word lists used to assemble headings and sentences

/// Capitalized words for headings only.
pub const HEADING_WORDS: &[&str] = &[
    "Lorem", "Ipsum", "Dolor", "Sit", "Amet", "Consectetur", "Adipiscing", "Elit", "Sed",
    "Eiusmod", "Tempor", "Incididunt", "Labore", "Dolore", "Magna", "Aliqua", "Enim", "Minim",
    "Veniam", "Quis", "Nostrud", "Exercitation", "Ullamco", "Laboris", "Nisi", "Aliquip",
    "Commodo", "Consequat", "Duis", "Aute", "Irure", "Reprehenderit", "Voluptate", "Velit",
    "Esse", "Cillum", "Fugiat", "Nulla", "Pariatur", "Excepteur", "Sint", "Occaecat",
    "Cupidatat", "Proident", "Sunt", "Culpa", "Officia", "Deserunt", "Mollit", "Anim", "Est",
    "Laborum", "Perspiciatis",
];

/// Lowercase words for paragraph sentences.
pub const BODY_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "voluptate",
    "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
];
