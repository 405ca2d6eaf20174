use super::Span::Plain;
use super::{Block, Card, Paragraph, Section};

pub(super) static BLOCKS: &[Block] = &[
    Block::Price {
        amount: "500",
        label: "PACK 1",
    },
    Block::Title {
        title: "Exploración Orgánica",
        subtitle: "(Foco en testeo y comunidad base)",
    },
    Block::Card(Card {
        title: "Detalles Operativos",
        sector: "P1",
        sections: &[
            Section::Subheading("Objetivo:"),
            Section::Text(Paragraph::body(&[Plain(
                "Testear contenido en TikTok para identificar virales, construir comunidad inicial (fans participativos en Melt), +500-1K interacciones orgánicas, ventas iniciales de vinilos, conexiones con DJs. Ideal para low-budget, con énfasis en stats para conocer público.",
            )])),
            Section::Heading("Componentes clave:"),
            Section::Subheading("TikTok Exploratorio:"),
            Section::Text(Paragraph::body(&[Plain(
                "Creamos cuenta dedicada a Melt label . Publicamos piezas orgánicas (visuales abstractos: procesos de tracks, snippets sets progressive, arte vinilo teaser). Analizamos stats (views, shares, demografía: 20-60 años, BA/Arg/World) para extraer insights.",
            )])),
            Section::Subheading("Migración a Instagram + Ads Virales:"),
            Section::Text(Paragraph::body(&[Plain(
                "Los mejores TikToks con mejor desempeño ( se adaptan y postean en IG (Reels/Stories). $100(aprox) en ads data-driven (Meta Spark Ads en virales orgánicos, targeting: fans progressive house AR, lookalikes de Cattaneo/Digweed/Sasha).",
            )])),
            Section::Subheading("Plataformas Música Integradas:"),
            Section::Labeled(&[
                (
                    "SoundCloud:",
                    Paragraph::body(&[Plain(
                        "Subimos sets/tracks, playlist \"Melt Vibes\" para comunidad (invita djs a contribuir tracks/remixes/sets).",
                    )]),
                ),
                (
                    "Bandcamp:",
                    Paragraph::body(&[Plain(
                        "Página optimizada contemplando opcion para pre-orders vinilos .",
                    )]),
                ),
                (
                    "Spotify:",
                    Paragraph::body(&[Plain(
                        "Pitching básico a playlists de progressive (SubmitHub), enlace a Bandcamp para conversión ventas.",
                    )]),
                ),
            ]),
            Section::Subheading("Estrategia Interconectada:"),
            Section::Text(Paragraph::body(&[Plain(
                "Links cruzados (SoundCloud → Bandcamp para descargas, Spotify → IG para comunidad). Ads $100(aprox) en Spotify (Discovery Mode) para streams que alimenten data.",
            )])),
            Section::Subheading("Data-Driven y Comunidad:"),
            Section::Text(Paragraph::body(&[Plain(
                "Usamos analytics (TikTok/IG Insights, Chartmetric básico) como \"método de extracción\": demografía, horarios peak, preferencias, etc . Posibilidades de UGC (fans comparten vinilo unboxing).",
            )])),
        ],
    }),
];
