//! # Dados Lexicais Embutidos
//!
//! Listas estáticas que formam o "modelo" padrão dos analisadores:
//!
//! - **Léxico Penn**: palavras frequentes (classes fechadas, verbos irregulares,
//!   numerais) com sua tag Penn Treebank mais provável.
//! - **Gazetteers**: entidades conhecidas por rótulo OntoNotes.
//! - **Listas de gatilhos**: meses, dias da semana, unidades, títulos de pessoa,
//!   sufixos de organização etc., usadas pelo motor de regras.
//!
//! Tudo aqui é dado fixo. Um artefato de modelo em disco (ver [`crate::model`])
//! pode estender o léxico e os gazetteers sem recompilar.

/// Léxico Penn Treebank: palavra (minúsculas) → tag mais provável.
pub const PENN_LEXICON: &[(&str, &str)] = &[
    // Determinantes
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("another", "DT"), ("all", "DT"), ("both", "DT"),
    ("either", "DT"), ("neither", "DT"), ("half", "PDT"), ("such", "JJ"),
    // Preposições e conjunções subordinativas
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("from", "IN"), ("about", "IN"), ("into", "IN"), ("over", "IN"),
    ("under", "IN"), ("after", "IN"), ("before", "IN"), ("between", "IN"),
    ("through", "IN"), ("during", "IN"), ("without", "IN"), ("within", "IN"),
    ("against", "IN"), ("among", "IN"), ("across", "IN"), ("behind", "IN"),
    ("beyond", "IN"), ("since", "IN"), ("until", "IN"), ("upon", "IN"), ("near", "IN"),
    ("than", "IN"), ("because", "IN"), ("if", "IN"), ("while", "IN"), ("although", "IN"),
    ("though", "IN"), ("whether", "IN"), ("as", "IN"), ("like", "IN"), ("per", "IN"),
    ("via", "IN"), ("around", "IN"), ("toward", "IN"), ("towards", "IN"), ("unlike", "IN"),
    ("to", "TO"),
    // Conjunções coordenativas
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"), ("plus", "CC"),
    // Pronomes
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("us", "PRP"),
    ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"), ("himself", "PRP"),
    ("herself", "PRP"), ("itself", "PRP"), ("ourselves", "PRP"), ("themselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    ("which", "WDT"), ("whatever", "WDT"), ("who", "WP"), ("whom", "WP"), ("what", "WP"),
    ("whose", "WP$"), ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    ("there", "EX"),
    // Modais
    ("can", "MD"), ("could", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"),
    ("shall", "MD"), ("should", "MD"), ("will", "MD"), ("would", "MD"), ("'ll", "MD"),
    ("'d", "MD"), ("ca", "MD"), ("wo", "MD"),
    // Advérbios
    ("not", "RB"), ("n't", "RB"), ("very", "RB"), ("also", "RB"), ("just", "RB"),
    ("now", "RB"), ("then", "RB"), ("here", "RB"), ("already", "RB"), ("still", "RB"),
    ("often", "RB"), ("never", "RB"), ("always", "RB"), ("soon", "RB"), ("quite", "RB"),
    ("rather", "RB"), ("too", "RB"), ("almost", "RB"), ("only", "RB"), ("even", "RB"),
    ("ever", "RB"), ("again", "RB"), ("perhaps", "RB"), ("maybe", "RB"), ("so", "RB"),
    ("well", "RB"), ("later", "RB"), ("ago", "RB"), ("today", "NN"), ("yesterday", "NN"),
    ("tomorrow", "NN"), ("more", "RBR"), ("most", "RBS"), ("less", "RBR"), ("least", "RBS"),
    // Verbos auxiliares
    ("be", "VB"), ("is", "VBZ"), ("are", "VBP"), ("am", "VBP"), ("was", "VBD"),
    ("were", "VBD"), ("been", "VBN"), ("being", "VBG"), ("'re", "VBP"), ("'m", "VBP"),
    ("have", "VBP"), ("has", "VBZ"), ("had", "VBD"), ("having", "VBG"), ("'ve", "VBP"),
    ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"), ("done", "VBN"), ("doing", "VBG"),
    // Verbos irregulares frequentes
    ("say", "VB"), ("says", "VBZ"), ("said", "VBD"), ("make", "VB"), ("made", "VBD"),
    ("go", "VB"), ("goes", "VBZ"), ("went", "VBD"), ("gone", "VBN"), ("get", "VB"),
    ("got", "VBD"), ("take", "VB"), ("took", "VBD"), ("taken", "VBN"), ("come", "VB"),
    ("came", "VBD"), ("see", "VB"), ("saw", "VBD"), ("seen", "VBN"), ("know", "VB"),
    ("knew", "VBD"), ("known", "VBN"), ("think", "VB"), ("thought", "VBD"), ("find", "VB"),
    ("found", "VBD"), ("give", "VB"), ("gave", "VBD"), ("given", "VBN"), ("tell", "VB"),
    ("told", "VBD"), ("become", "VB"), ("became", "VBD"), ("leave", "VB"), ("left", "VBD"),
    ("feel", "VB"), ("felt", "VBD"), ("bring", "VB"), ("brought", "VBD"), ("begin", "VB"),
    ("began", "VBD"), ("begun", "VBN"), ("keep", "VB"), ("kept", "VBD"), ("hold", "VB"),
    ("held", "VBD"), ("write", "VB"), ("wrote", "VBD"), ("written", "VBN"), ("stand", "VB"),
    ("stood", "VBD"), ("hear", "VB"), ("heard", "VBD"), ("mean", "VB"), ("meant", "VBD"),
    ("meet", "VB"), ("met", "VBD"), ("run", "VB"), ("ran", "VBD"), ("pay", "VB"),
    ("paid", "VBD"), ("speak", "VB"), ("speaks", "VBZ"), ("spoke", "VBD"), ("spoken", "VBN"),
    ("lead", "VB"), ("led", "VBD"), ("grow", "VB"), ("grew", "VBD"), ("grown", "VBN"),
    ("lose", "VB"), ("lost", "VBD"), ("send", "VB"), ("sent", "VBD"), ("build", "VB"),
    ("built", "VBD"), ("buy", "VB"), ("bought", "VBD"), ("win", "VB"), ("won", "VBD"),
    ("sell", "VB"), ("sold", "VBD"), ("want", "VB"), ("use", "VB"), ("work", "VB"),
    ("call", "VB"), ("try", "VB"), ("ask", "VB"), ("need", "VB"), ("seem", "VB"),
    ("help", "VB"), ("show", "VB"), ("live", "VB"), ("believe", "VB"), ("happen", "VB"),
    // Numerais
    ("one", "CD"), ("two", "CD"), ("three", "CD"), ("four", "CD"), ("five", "CD"),
    ("six", "CD"), ("seven", "CD"), ("eight", "CD"), ("nine", "CD"), ("ten", "CD"),
    ("eleven", "CD"), ("twelve", "CD"), ("twenty", "CD"), ("thirty", "CD"), ("forty", "CD"),
    ("fifty", "CD"), ("hundred", "CD"), ("thousand", "CD"), ("million", "CD"),
    ("billion", "CD"), ("trillion", "CD"),
    // Adjetivos frequentes
    ("good", "JJ"), ("new", "JJ"), ("first", "JJ"), ("last", "JJ"), ("long", "JJ"),
    ("great", "JJ"), ("little", "JJ"), ("own", "JJ"), ("other", "JJ"), ("old", "JJ"),
    ("right", "JJ"), ("big", "JJ"), ("high", "JJ"), ("different", "JJ"), ("small", "JJ"),
    ("large", "JJ"), ("next", "JJ"), ("early", "JJ"), ("young", "JJ"), ("few", "JJ"),
    ("public", "JJ"), ("bad", "JJ"), ("same", "JJ"), ("able", "JJ"), ("worth", "JJ"),
    ("many", "JJ"), ("much", "JJ"), ("better", "JJR"), ("best", "JJS"), ("worse", "JJR"),
    ("worst", "JJS"),
    // Substantivos frequentes que as heurísticas erram
    ("company", "NN"), ("year", "NN"), ("years", "NNS"), ("people", "NNS"), ("time", "NN"),
    ("world", "NN"), ("news", "NN"), ("city", "NN"), ("country", "NN"), ("percent", "NN"),
    ("%", "NN"), ("children", "NNS"), ("men", "NNS"), ("women", "NNS"), ("data", "NNS"),
    // Interjeições
    ("oh", "UH"), ("hello", "UH"), ("hi", "UH"), ("yes", "UH"), ("wow", "UH"), ("hey", "UH"),
];

/// Tags de classe fechada: vencem a heurística de nome próprio mesmo capitalizadas.
pub const CLOSED_CLASS_TAGS: &[&str] = &[
    "DT", "PDT", "IN", "TO", "CC", "PRP", "PRP$", "WDT", "WP", "WP$", "WRB", "EX", "MD",
    "UH", "POS", "RP",
];

/// Formas de "be" (passiva) e "have" (perfeito): seguidas de VBD, viram VBN.
pub const BE_FORMS: &[&str] = &["be", "is", "are", "am", "was", "were", "been", "being", "'s", "'re", "'m"];
pub const HAVE_FORMS: &[&str] = &["have", "has", "had", "having", "'ve", "'d"];
pub const DO_FORMS: &[&str] = &["do", "does", "did"];

/// Preposições que introduzem oração (UD: SCONJ em vez de ADP).
pub const SUBORDINATORS: &[&str] = &[
    "because", "if", "while", "although", "though", "whether", "since", "unless",
];

// ============================================================================
// Gazetteers (rótulos OntoNotes)
// ============================================================================

/// Pessoas conhecidas (nome completo).
pub const PERSONS: &[&str] = &[
    "Steve Jobs", "Steve Wozniak", "Tim Cook", "Bill Gates", "Paul Allen", "Elon Musk",
    "Jeff Bezos", "Mark Zuckerberg", "Larry Page", "Sergey Brin", "Satya Nadella",
    "Sundar Pichai", "Warren Buffett", "Barack Obama", "Joe Biden", "Donald Trump",
    "Abraham Lincoln", "George Washington", "Albert Einstein", "Isaac Newton",
    "Marie Curie", "Charles Darwin", "William Shakespeare", "Jane Austen",
    "Leonardo da Vinci", "Martin Luther King", "Nelson Mandela", "Winston Churchill",
    "Ada Lovelace", "Alan Turing", "Taylor Swift", "Lionel Messi", "Serena Williams",
];

/// Prenomes frequentes: prenome + palavra capitalizada → PERSON.
pub const FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Steve",
    "Paul", "Andrew", "Kevin", "Brian", "George", "Edward", "Peter", "Tim", "Bill",
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
    "Sarah", "Karen", "Nancy", "Lisa", "Emily", "Emma", "Olivia", "Anna", "Maria",
    "Alice", "Laura", "Rachel", "Jane", "Kate", "Hannah", "Sophia", "Grace",
];

pub const ORGANIZATIONS: &[&str] = &[
    "Apple", "Microsoft", "Google", "Alphabet", "Amazon", "Meta", "Facebook", "Tesla",
    "SpaceX", "IBM", "Intel", "Nvidia", "Netflix", "Samsung", "Sony", "Toyota",
    "Boeing", "Walmart", "Disney", "Coca-Cola", "NASA", "FBI", "CIA", "NATO",
    "United Nations", "European Union", "World Health Organization", "WHO",
    "Federal Reserve", "Congress", "Senate", "Supreme Court", "Harvard", "MIT",
    "Stanford", "Oxford", "Red Cross", "Reuters", "BBC", "CNN", "New York Times",
    "OpenAI", "Goldman Sachs", "JPMorgan", "Berkshire Hathaway",
];

/// Entidades geopolíticas: países, estados, cidades.
pub const GPES: &[&str] = &[
    "United States", "United States of America", "USA", "U.S.", "US", "America",
    "United Kingdom", "UK", "U.K.", "Britain", "England", "Scotland", "Ireland", "Canada",
    "Mexico", "Brazil", "Argentina", "France", "Germany", "Italy", "Spain", "Portugal",
    "Russia", "China", "Japan", "India", "Australia", "Egypt", "Nigeria", "South Africa",
    "Israel", "Iran", "Turkey", "Korea", "South Korea", "North Korea", "Vietnam",
    "California", "Texas", "Florida", "New York", "Washington", "Massachusetts",
    "Illinois", "Ohio", "Georgia", "Virginia", "Oregon", "Nevada", "Arizona",
    "London", "Paris", "Berlin", "Rome", "Madrid", "Lisbon", "Moscow", "Beijing",
    "Shanghai", "Tokyo", "Delhi", "Mumbai", "Sydney", "Toronto", "Chicago", "Boston",
    "Los Angeles", "San Francisco", "Seattle", "Cupertino", "Silicon Valley",
    "New York City", "Hanoi", "Sao Paulo", "São Paulo", "Rio de Janeiro",
];

/// Locais não-GPE: continentes, oceanos, rios, montanhas.
pub const LOCATIONS: &[&str] = &[
    "Europe", "Asia", "Africa", "Antarctica", "North America", "South America",
    "Latin America", "Middle East", "Pacific Ocean", "Atlantic Ocean", "Indian Ocean",
    "Pacific", "Atlantic", "Mediterranean", "Amazon River", "Nile", "Mississippi River",
    "Mount Everest", "Alps", "Himalayas", "Rocky Mountains", "Sahara", "Arctic",
];

/// Nacionalidades, grupos religiosos ou políticos.
pub const NORPS: &[&str] = &[
    "American", "Americans", "British", "Canadian", "Mexican", "Brazilian", "French",
    "German", "Germans", "Italian", "Spanish", "Portuguese", "Russian", "Chinese",
    "Japanese", "Indian", "Australian", "European", "Europeans", "African", "Asian",
    "Vietnamese", "Korean", "Christian", "Christians", "Muslim", "Muslims", "Jewish",
    "Buddhist", "Hindu", "Catholic", "Democrat", "Democrats", "Republican",
    "Republicans", "Democratic",
];

/// Nomes de idiomas (só viram LANGUAGE com contexto; senão caem em NORP).
pub const LANGUAGES: &[&str] = &[
    "English", "French", "Spanish", "Portuguese", "German", "Italian", "Russian",
    "Chinese", "Mandarin", "Cantonese", "Japanese", "Korean", "Arabic", "Hindi",
    "Vietnamese", "Latin", "Greek", "Hebrew", "Dutch", "Swahili",
];

/// Verbos e preposições que indicam idioma: "speaks English", "written in French".
pub const LANGUAGE_CUES: &[&str] = &[
    "speak", "speaks", "spoke", "spoken", "speaking", "in", "learn", "learning",
    "learned", "translate", "translated", "fluent",
];

pub const FACILITIES: &[&str] = &[
    "Golden Gate Bridge", "Eiffel Tower", "Empire State Building", "White House",
    "Pentagon", "Statue of Liberty", "Brooklyn Bridge", "Heathrow", "JFK Airport",
    "Wembley Stadium", "Louvre", "Great Wall", "Panama Canal",
];

pub const PRODUCTS: &[&str] = &[
    "iPhone", "iPad", "Macintosh", "Mac", "MacBook", "Windows", "Android", "PlayStation",
    "Xbox", "Kindle", "Model S", "Model 3", "Boeing 747", "ChatGPT", "Walkman",
];

pub const EVENTS: &[&str] = &[
    "World War I", "World War II", "Cold War", "Olympics", "Olympic Games",
    "World Cup", "Super Bowl", "Great Depression", "Renaissance", "Brexit",
    "Industrial Revolution", "French Revolution", "Civil War",
];

pub const WORKS_OF_ART: &[&str] = &[
    "Mona Lisa", "Hamlet", "Romeo and Juliet", "Pride and Prejudice", "The Starry Night",
    "Star Wars", "Harry Potter", "The Beatles", "Bohemian Rhapsody",
];

pub const LAWS: &[&str] = &[
    "Constitution", "Bill of Rights", "First Amendment", "Second Amendment",
    "Civil Rights Act", "Affordable Care Act", "Magna Carta", "GDPR",
];

// ============================================================================
// Gatilhos do motor de regras
// ============================================================================

pub const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december", "jan.", "feb.", "apr.", "aug.",
    "sep.", "sept.", "oct.", "nov.", "dec.",
];

/// Meses que também são palavras comuns ("may", "march"): só contam com contexto.
pub const AMBIGUOUS_MONTHS: &[&str] = &["may", "march"];

pub const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

pub const RELATIVE_DAYS: &[&str] = &["today", "yesterday", "tomorrow"];

/// Unidades de período: "three years", "last week".
pub const DATE_UNITS: &[&str] = &[
    "day", "days", "week", "weeks", "month", "months", "year", "years", "decade",
    "decades", "century", "centuries",
];

pub const DATE_MODIFIERS: &[&str] = &["last", "next", "this", "past", "coming"];

pub const TIME_WORDS: &[&str] = &["tonight", "noon", "midnight"];

pub const DAY_PARTS: &[&str] = &["morning", "afternoon", "evening", "night"];

pub const MERIDIEMS: &[&str] = &["am", "pm", "a.m.", "p.m.", "o'clock"];

/// Numerais por extenso (exceto "one", ambíguo como pronome).
pub const NUMBER_WORDS: &[&str] = &[
    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty",
    "ninety", "hundred", "thousand", "million", "billion", "trillion", "dozen",
];

pub const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "twentieth", "hundredth",
];

/// Escalas que estendem um valor monetário ou cardinal: "$3 trillion".
pub const SCALE_WORDS: &[&str] = &["thousand", "million", "billion", "trillion", "bn", "m"];

pub const CURRENCY_SYMBOLS: &[&str] = &["$", "€", "£", "¥", "US$", "R$"];

pub const CURRENCY_WORDS: &[&str] = &[
    "dollar", "dollars", "euro", "euros", "cents", "yen", "usd", "eur", "gbp", "reais",
    "bucks",
];

pub const PERCENT_WORDS: &[&str] = &["%", "percent", "pct"];

pub const UNITS: &[&str] = &[
    "km", "kilometers", "kilometres", "kilometer", "miles", "mile", "meters", "metres",
    "meter", "m2", "feet", "foot", "ft", "inches", "inch", "kg", "kilograms", "grams",
    "pounds", "lbs", "tons", "tonnes", "liters", "litres", "gallons", "acres", "hectares",
    "degrees", "mph",
];

/// Títulos que precedem nomes de pessoa (comparados em minúsculas).
pub const PERSON_TITLES: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sir", "president", "senator", "governor",
    "mayor", "judge", "ceo", "founder", "minister", "king", "queen", "prince",
    "princess", "pope", "general", "captain", "professor", "director", "chairman",
];

/// Palavras funcionais que interrompem uma sequência de palavras capitalizadas.
pub const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "in", "on", "at", "by", "for",
    "and", "but", "or", "of", "to", "from", "with", "as", "after", "before", "when",
    "while", "if", "it", "he", "she", "they", "we", "i", "his", "her", "their", "our",
];

/// Palavra-núcleo no fim de uma sequência capitalizada → rótulo da sequência inteira.
pub const HEAD_SUFFIXES: &[(&str, &str)] = &[
    ("Inc.", "ORG"), ("Inc", "ORG"), ("Corp.", "ORG"), ("Corp", "ORG"),
    ("Corporation", "ORG"), ("Ltd.", "ORG"), ("Ltd", "ORG"), ("LLC", "ORG"),
    ("Co.", "ORG"), ("Company", "ORG"), ("Group", "ORG"), ("Holdings", "ORG"),
    ("Bank", "ORG"), ("University", "ORG"), ("Institute", "ORG"), ("Foundation", "ORG"),
    ("Association", "ORG"), ("Agency", "ORG"), ("Party", "ORG"), ("Council", "ORG"),
    ("River", "LOC"), ("Ocean", "LOC"), ("Sea", "LOC"), ("Lake", "LOC"),
    ("Mountains", "LOC"), ("Valley", "LOC"), ("Desert", "LOC"), ("Island", "LOC"),
    ("Islands", "LOC"), ("Bay", "LOC"),
    ("Airport", "FAC"), ("Bridge", "FAC"), ("Tower", "FAC"), ("Stadium", "FAC"),
    ("Station", "FAC"), ("Building", "FAC"), ("Highway", "FAC"),
    ("War", "EVENT"), ("Games", "EVENT"), ("Cup", "EVENT"), ("Championship", "EVENT"),
    ("Festival", "EVENT"), ("Summit", "EVENT"), ("Revolution", "EVENT"),
    ("Act", "LAW"), ("Treaty", "LAW"), ("Amendment", "LAW"),
];

/// Palavra-núcleo no início: "Mount Fuji", "University of Tokyo", "Hurricane Katrina".
/// `true` indica que a forma "X of Y" é aceita.
pub const HEAD_PREFIXES: &[(&str, &str, bool)] = &[
    ("Mount", "LOC", false), ("Lake", "LOC", false), ("Gulf", "LOC", true),
    ("Hurricane", "EVENT", false), ("Battle", "EVENT", true),
    ("University", "ORG", true), ("Bank", "ORG", true), ("Department", "ORG", true),
    ("Ministry", "ORG", true), ("College", "ORG", true), ("Institute", "ORG", true),
    ("Republic", "GPE", true), ("Kingdom", "GPE", true),
];

/// Todos os gazetteers embutidos, por rótulo OntoNotes.
pub fn builtin_gazetteers() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        ("PERSON", PERSONS),
        ("ORG", ORGANIZATIONS),
        ("GPE", GPES),
        ("LOC", LOCATIONS),
        ("NORP", NORPS),
        ("FAC", FACILITIES),
        ("PRODUCT", PRODUCTS),
        ("EVENT", EVENTS),
        ("WORK_OF_ART", WORKS_OF_ART),
        ("LAW", LAWS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glossary::{explain, TagKind, UNKNOWN};

    #[test]
    fn test_lexicon_tags_are_documented() {
        for (word, tag) in PENN_LEXICON {
            assert_ne!(explain(tag, TagKind::PartOfSpeech), UNKNOWN, "tag de '{word}'");
        }
    }

    #[test]
    fn test_gazetteer_labels_are_documented() {
        for (label, _) in builtin_gazetteers() {
            assert_ne!(explain(label, TagKind::EntityLabel), UNKNOWN);
        }
        for (_, label) in HEAD_SUFFIXES {
            assert_ne!(explain(label, TagKind::EntityLabel), UNKNOWN);
        }
        for (_, label, _) in HEAD_PREFIXES {
            assert_ne!(explain(label, TagKind::EntityLabel), UNKNOWN);
        }
    }

    #[test]
    fn test_lexicon_keys_are_lowercase() {
        for (word, _) in PENN_LEXICON {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
