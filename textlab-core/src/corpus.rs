//! # Textos de Exemplo
//!
//! O texto que vem preenchido no dashboard e uma pequena coleção de textos de
//! demonstração em inglês, cada um exercitando um grupo de rótulos diferente.

/// Texto inicial do campo de entrada.
pub const DEFAULT_TEXT: &str = "Apple Inc. was founded by Steve Jobs in California on April 1, 1976. \
The company is now worth over $3 trillion.";

/// Textos de demonstração para a interface web: (domínio, texto).
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Exemplo", DEFAULT_TEXT),
        (
            "Tecnologia",
            "Microsoft was founded by Bill Gates and Paul Allen in 1975. Decades later, \
             Satya Nadella moved the company toward cloud computing, and its shares rose 12% \
             last year. Google and OpenAI compete with it in Silicon Valley.",
        ),
        (
            "História",
            "On July 20, 1969, NASA landed astronauts on the Moon. During the Cold War, \
             the United States and Russia raced to reach space first. Winston Churchill had \
             warned about the rivalry after World War II.",
        ),
        (
            "Economia",
            "The Federal Reserve raised rates by 0.25 percent on Wednesday. Goldman Sachs \
             expects $2 billion in new bond sales next month, while Berkshire Hathaway \
             reported three million dollars in losses at 10:30 a.m. yesterday.",
        ),
        (
            "Geografia",
            "The Amazon River crosses Brazil before reaching the Atlantic Ocean. Mount Everest, \
             in the Himalayas, rises about 8,849 meters. Tourists in Paris visit the Eiffel \
             Tower and the Louvre every morning.",
        ),
        (
            "Cultura",
            "Leonardo da Vinci painted the Mona Lisa in Italy. William Shakespeare wrote Hamlet \
             in English, and Dr. Watson translated it into French for the third edition. \
             Taylor Swift played Wembley Stadium on Saturday.",
        ),
        (
            "Tokenização",
            "Mr. O'Brien didn't think the U.S. would sign the treaty; she's sure it's \
             well-known that e-mail costs $0.05 (approx.) per message... Isn't it?",
        ),
    ]
}
