/// Built-in English strings (default locale).
///
/// `{year}` in `footer.copyright` is filled in at render time.
pub const ENGLISH_STRINGS: &[(&str, &str)] = &[
    // ==================== Navigation ====================
    ("nav.home", "Home"),
    ("nav.blog", "Blog"),
    ("nav.about", "About"),
    ("nav.contact", "Contact"),
    // ==================== Articles ====================
    ("article.readMore", "Read more"),
    ("article.readIn", "Read in"),
    ("article.notAvailableTitle", "Article Not Available"),
    ("article.notAvailableMessage", "This article is not yet available in English."),
    ("article.availableIn", "Available in other languages:"),
    ("article.publishedOn", "Published on"),
    ("article.updatedOn", "Updated on"),
    // ==================== Language Names ====================
    ("language.french", "French"),
    ("language.english", "English"),
    // ==================== Footer ====================
    ("footer.copyright", "© {year} Bilingual Tech Blog. All rights reserved."),
    ("footer.builtWith", "Built with Rust"),
    // ==================== Common ====================
    ("common.loading", "Loading..."),
    ("common.error", "An error occurred"),
    ("common.backToHome", "Back to Home"),
    // ==================== SEO ====================
    (
        "seo.defaultDescription",
        "A bilingual tech blog covering web development, programming, and technology insights.",
    ),
];

/// Built-in French strings.
pub const FRENCH_STRINGS: &[(&str, &str)] = &[
    // ==================== Navigation ====================
    ("nav.home", "Accueil"),
    ("nav.blog", "Blog"),
    ("nav.about", "À Propos"),
    ("nav.contact", "Contact"),
    // ==================== Articles ====================
    ("article.readMore", "Lire la suite"),
    ("article.readIn", "Lire en"),
    ("article.notAvailableTitle", "Article Non Disponible"),
    ("article.notAvailableMessage", "Cet article n'est pas encore disponible en français."),
    ("article.availableIn", "Disponible dans d'autres langues :"),
    ("article.publishedOn", "Publié le"),
    ("article.updatedOn", "Mis à jour le"),
    // ==================== Language Names ====================
    ("language.french", "Français"),
    ("language.english", "Anglais"),
    // ==================== Footer ====================
    ("footer.copyright", "© {year} Blog Technique Bilingue. Tous droits réservés."),
    ("footer.builtWith", "Créé avec Rust"),
    // ==================== Common ====================
    ("common.loading", "Chargement..."),
    ("common.error", "Une erreur s'est produite"),
    ("common.backToHome", "Retour à l'accueil"),
    // ==================== SEO ====================
    (
        "seo.defaultDescription",
        "Un blog technique bilingue couvrant le développement web, la programmation et les tendances technologiques.",
    ),
];
