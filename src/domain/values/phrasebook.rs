//! Exact-match phrase book used when no online translation is available.
//!
//! Covers only the fixed texts the pipeline itself emits (default insights,
//! recommendations and the summary template). No fuzzy matching: a miss
//! leaves the text untouched.

use crate::domain::values::language::Language;

type PhraseTable = &'static [(&'static str, &'static str)];

const SPANISH: PhraseTable = &[
    ("Strong growth potential in emerging markets", "Fuerte potencial de crecimiento en mercados emergentes"),
    ("Increasing adoption of AI technologies", "Adopción creciente de tecnologías de IA"),
    ("Competitive landscape is evolving rapidly", "El panorama competitivo está evolucionando rápidamente"),
    ("Invest in emerging technologies", "Invertir en tecnologías emergentes"),
    ("Focus on customer experience", "Centrarse en la experiencia del cliente"),
    ("Expand into new markets", "Expandirse a nuevos mercados"),
    (
        "This report provides comprehensive market analysis with AI-driven insights.",
        "Este informe proporciona un análisis integral del mercado con perspectivas impulsadas por IA.",
    ),
];

const FRENCH: PhraseTable = &[
    ("Strong growth potential in emerging markets", "Fort potentiel de croissance dans les marchés émergents"),
    ("Increasing adoption of AI technologies", "Adoption croissante des technologies d'IA"),
    ("Competitive landscape is evolving rapidly", "Le paysage concurrentiel évolue rapidement"),
    ("Invest in emerging technologies", "Investir dans les technologies émergentes"),
    ("Focus on customer experience", "Se concentrer sur l'expérience client"),
    ("Expand into new markets", "S'étendre vers de nouveaux marchés"),
    (
        "This report provides comprehensive market analysis with AI-driven insights.",
        "Ce rapport fournit une analyse complète du marché avec des perspectives pilotées par l'IA.",
    ),
];

const HINDI: PhraseTable = &[
    ("Strong growth potential in emerging markets", "उभरते बाजारों में मजबूत विकास की संभावना"),
    ("Increasing adoption of AI technologies", "एआई तकनीकों का बढ़ता अपनाना"),
    ("Competitive landscape is evolving rapidly", "प्रतिस्पर्धी परिदृश्य तेजी से विकसित हो रहा है"),
    ("Invest in emerging technologies", "उभरती प्रौद्योगिकियों में निवेश करें"),
    ("Focus on customer experience", "ग्राहक अनुभव पर ध्यान दें"),
    ("Expand into new markets", "नए बाजारों में विस्तार करें"),
    (
        "This report provides comprehensive market analysis with AI-driven insights.",
        "यह रिपोर्ट एआई-संचालित अंतर्दृष्टि के साथ व्यापक बाजार विश्लेषण प्रदान करती है।",
    ),
];

fn table(target: Language) -> PhraseTable {
    match target {
        Language::Spanish => SPANISH,
        Language::French => FRENCH,
        Language::Hindi => HINDI,
        Language::English | Language::German | Language::Chinese => &[],
    }
}

pub fn lookup(target: Language, text: &str) -> Option<&'static str> {
    table(target)
        .iter()
        .find(|(source, _)| *source == text)
        .map(|(_, translated)| *translated)
}
