//! First-run seed documents.
//!
//! Written once when a data file is absent; never consulted again after
//! that.

use serde_json::json;

use crate::models::{ContentDocument, Speaker};

/// Initial speaker roster: a single example profile the admin panel can
/// edit or delete.
pub fn default_speakers() -> Vec<Speaker> {
    vec![Speaker {
        id: 1,
        name: Some("Sarah Johnson".to_string()),
        title: Some("CEO & Innovation Strategist".to_string()),
        bio: Some(
            "Sarah Johnson is a renowned innovation strategist with over 20 years of \
             experience transforming organizations through creative thinking and strategic \
             leadership."
                .to_string(),
        ),
        topics: vec![
            "Innovation".to_string(),
            "Leadership".to_string(),
            "Technology".to_string(),
        ],
        key_topics: vec![
            "Leading Through Digital Transformation".to_string(),
            "Building Innovation Cultures".to_string(),
            "The Future of Work".to_string(),
            "Strategic Leadership in Uncertain Times".to_string(),
        ],
        image: Some("👤".to_string()),
    }]
}

/// Initial bilingual copy dictionary for the public site.
pub fn default_content() -> ContentDocument {
    json!({
        "en": {
            "navBrand": "Passerelles",
            "navHome": "Home",
            "navPillars": "Pillars",
            "navContact": "Contact",
            "navCTA": "Let's Talk Possibilities",
            "langToggle": "FR",
            "heroSlogan": "Where Creativity Meets Competition.",
            "heroSubtext": "Unleashing the full potential of Art and Sport.",
            "visionTitle": "Why We Exist",
            "visionBody": "We're here to spark **unforgettable collaboration**. We unlock fresh audience engagement, build powerful new revenue streams, and cultivate sustainable careers by bringing the deliberate beauty of Art and the raw energy of Sport together.",
            "convictTitle1": "Challenge the External Frame",
            "convict1": "We demand a change in how society views both the athlete and the artist. Our goal is to unify the perception of both as masters of form, rhythm, and profound intellectual discipline.",
            "convictTitle2": "Break the Internal Limit",
            "convict2": "We empower athletes to redefine their own identity. By highlighting their transferable skills, we shatter the self-imposed limits that restrict their scope of opportunities during and after their primary career.",
            "convictTitle3": "Complete the Room",
            "convict3": "We are strategic network builders, actively identifying and integrating key players: institutions, disciplines, and funding models that are not currently in the room but are essential for sustainable, large-scale synergy.",
            "pillarTitle": "Our Pillars of Synergy",
            "pillardesc": "We guide our partners and community through a focused, three-step journey to unlock mutual growth and sustainable institutional connections.",
            "p1Title": "The Nexus Lab",
            "p1Desc": "The Nexus Lab is our thought leadership division, dedicated to researching and defining the powerful synergies between artistic mastery and athletic performance.",
            "p2Title": "Transformative Programs",
            "p2Desc": "Transformative Programs delivers our core, scalable services, including specialized workshops and curricula designed to translate conceptual synergy into measurable, durable results.",
            "p3Title": "Strategic Alliances",
            "p3Desc": "The Strategic Alliances pillar is our high-value consulting service, acting as a trusted broker to match major Arts and Sports institutions for impactful, co-branded initiatives.",
            "contactPrompt": "Ready to change the game?",
            "contactCTA": "Let's Talk Possibilities",
            "footerLegal": "© 2024 Passerelles. All Rights Reserved. Bridge the gap. Create the value."
        },
        "fr": {
            "navBrand": "Passerelles",
            "navHome": "Accueil",
            "navPillars": "Piliers",
            "navContact": "Contact",
            "navCTA": "Parlons Possibilités",
            "langToggle": "EN",
            "heroSlogan": "Là où la Créativité rencontre la Compétition.",
            "heroSubtext": "Libérez le potentiel illimité de l'Art et du Sport.",
            "visionTitle": "Pourquoi Nous Existons",
            "visionBody": "Notre but est de déclencher des **collaborations inoubliables**. Nous générons un engagement renouvelé du public, créons de puissantes sources de revenus et favorisons le développement de carrières durables en unissant la beauté délibérée de l'Art et l'énergie brute du Sport.",
            "convictTitle1": "Défier le Cadre Externe",
            "convict1": "Nous exigeons un changement dans la façon dont la société perçoit à la fois l'athlète et l'artiste.",
            "convictTitle2": "Briser la Limite Interne",
            "convict2": "Nous donnons aux athlètes les moyens de redéfinir leur propre identité.",
            "convictTitle3": "Compléter la Salle",
            "convict3": "Nous sommes des bâtisseurs de réseaux stratégiques.",
            "pillarTitle": "Nos Piliers de Synergie",
            "pillardesc": "Nous guidons nos partenaires et notre communauté à travers un parcours focalisé en trois étapes.",
            "p1Title": "Le Nexus Lab",
            "p1Desc": "Le Nexus Lab est notre division de leadership éclairé.",
            "p2Title": "Programmes Transformateurs",
            "p2Desc": "Les Programmes Transformateurs offrent nos services de base évolutifs.",
            "p3Title": "Alliances Stratégiques",
            "p3Desc": "Le pilier Alliances Stratégiques est notre service de conseil à haute valeur ajoutée.",
            "contactPrompt": "Prêt à changer la donne ?",
            "contactCTA": "Parlons Possibilités",
            "footerLegal": "© 2024 Passerelles. Tous droits réservés."
        }
    })
}
