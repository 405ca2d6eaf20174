use super::Span::Plain;
use super::{Block, Card, Paragraph, Section};

pub(super) static BLOCKS: &[Block] = &[
    Block::Marker("INIT_SEQUENCE_01"),
    Block::Card(Card {
        title: "Introducción Estratégica",
        sector: "A1",
        sections: &[
            Section::Text(Paragraph::body(&[Plain(
                "La idea es acompañar el lanzamiento de la colección de vinilos de Melt con un plan de marketing integral, cuidadosamente alineado con tus objetivos: definición de identidad de marca, ventas físicas y digitales, fortalecimiento del vínculo con DJs, construcción de una comunidad activa en torno a eventos y talleres, y generación de contenido centrado en sets, procesos y visuales abstractos.",
            )])),
            Section::Text(Paragraph::body(&[Plain(
                "La estructura está pensada para comenzar de forma accesible y de bajo esfuerzo, priorizando acciones concretas que permitan medir resultados reales desde el inicio. No se trata de una progresión rígida de “Pack 1 a Pack 2”, sino de módulos iniciales independientes, diseñados como punto de partida, que pueden escalarse de manera puntual (más contenido, pauta, análisis de datos avanzados, etc.) únicamente si los indicadores lo justifican.",
            )])),
            Section::Text(Paragraph::body(&[Plain(
                "El crecimiento del plan queda siempre condicionado a que existan beneficios tangibles para Melt: ventas de vinilos, aumento de interacción, consolidación de comunidad o tracción real alrededor del proyecto. De este modo, avanzamos con criterio, evaluamos impacto y solo ampliamos cuando tiene sentido hacerlo.",
            )])),
            Section::Quote(&[
                Paragraph::body(&[Plain(
                    "Para mí, este esquema implica poner el valor del trabajo por delante de cualquier upgrade, construyendo una relación basada en resultados comprobables y confianza mutua. Para vos, significa contar con una estrategia flexible, medible y orientada a objetivos concretos, sin asumir riesgos innecesarios.",
                )]),
                Paragraph::body(&[Plain(
                    "Si te parece bien, el próximo paso podría ser definir qué starter preferís activar y qué métricas usaríamos como referencia para eventuales expansiones del plan. Creo que así sentamos una base sólida para que el crecimiento sea genuinamente beneficioso para ambas partes.",
                )]),
            ]),
        ],
    }),
    Block::Card(Card {
        title: "Objetivos",
        sector: "A2",
        sections: &[Section::Bullets(&[
            Paragraph::caps(&[Plain("definir identidad de marca.")]),
            Paragraph::caps(&[Plain("ventas fisicas y digitales.")]),
            Paragraph::caps(&[Plain("conexiones profesionales con djs.")]),
            Paragraph::caps(&[Plain("comunidad participativa en eventos y talleres.")]),
            Paragraph::caps(&[Plain(
                "contenido centrado en sets, procesos creativos, visuales abstractos.",
            )]),
        ])],
    }),
    Block::Card(Card {
        title: "Plan Integral",
        sector: "A3",
        sections: &[
            Section::Heading(
                "Propuesta plan de marketing integral para el sello Melt enfocado en el lanzamiento de esta coleccion de vinilos.",
            ),
            Section::Text(Paragraph::body(&[Plain(
                "El plan se basa en prácticas probadas para DJs y labels independientes: Exploración orgánica en TikTok para testear contenido, migración de lo viral a Instagram con ads data-driven, integración estratégica entre SoundCloud, Bandcamp y Spotify, y un enfoque en extracción de estadísticas para conocer tu público, conectar con ellos y construir comunidad.",
            )])),
            Section::Text(Paragraph::body(&[Plain(
                "Esto no solo impulsa la ventas de los vinilos, sino que genera buzz local en BSAS, conexiones DJs (outreach sutil) y comunidad activa(invitación a participar).",
            )])),
        ],
    }),
];
