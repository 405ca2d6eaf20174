use super::Span::{Plain, Strong};
use super::{Block, Card, Paragraph, Section};

pub(super) static BLOCKS: &[Block] = &[
    Block::Price {
        amount: "1.000",
        label: "PACK 2",
    },
    Block::Title {
        title: "Comunidad Data-Driven + Marca Personal Antígona",
        subtitle: "(Escalable según crecimiento de marca personal, volumen de contenido y alcance)",
    },
    Block::Banner("INCLUYE TODO LO QUE INCLUYE EL PACK 1 +"),
    Block::Callout(Paragraph::body(&[
        Plain("Este pack está diseñado para dar un paso más profundo: "),
        Strong("consolidar a Antígona como marca personal con identidad clara, comunidad activa y capacidad real de generar tracción económica y cultural"),
        Plain(", con impacto directo sobre Melt."),
    ])),
    Block::Card(Card {
        title: "Desarrollo de Marca Personal",
        sector: "P2-A",
        sections: &[
            Section::Text(Paragraph::body(&[Plain(
                "Trabajamos la identidad de Antígona en TikTok e Instagram desde una definición precisa:",
            )])),
            Section::Labeled(&[
                (
                    "Quién es:",
                    Paragraph::body(&[Plain(
                        "DJ/productora con un sonido curado y una narrativa clara, orientada a un público amplio pero específico (20–60 años).",
                    )]),
                ),
                (
                    "Qué busca:",
                    Paragraph::body(&[Plain(
                        "Transformar el proyecto en algo autosustentable, con objetivos explícitos (ventas, conexiones, comunidad).",
                    )]),
                ),
                (
                    "Qué la diferencia:",
                    Paragraph::body(&[Plain(
                        "Una visión interna sólida que se vuelve tangible a través de sets, procesos creativos y material abstracto que no se limita al resultado final.",
                    )]),
                ),
            ]),
            Section::Text(Paragraph::body(&[
                Plain("La estrategia de contenido deja de ser aislada y pasa a pensarse "),
                Strong("como un sistema a mediano y largo plazo"),
                Plain(", priorizando series continuas que construyen relato, expectativa y pertenencia."),
            ])),
        ],
    }),
    Block::Card(Card {
        title: "Enfoque Data-Driven",
        sector: "P2-B",
        sections: &[
            Section::Text(Paragraph::body(&[Plain(
                "Implementamos un enfoque basado en datos reales:",
            )])),
            Section::Bullets(&[
                Paragraph::body(&[
                    Plain("Uso de "),
                    Strong("analytics"),
                    Plain(" para detectar patrones, necesidades y oportunidades (qué tipo de contenido conecta, qué genera interacción sostenida, qué convierte)."),
                ]),
                Paragraph::body(&[
                    Plain("Configuración de "),
                    Strong("cuenta de empresa"),
                    Plain(" para medir y optimizar métricas clave: engagement, crecimiento, conversión a ventas y activación de comunidad."),
                ]),
                Paragraph::body(&[Plain(
                    "Ajustes estratégicos continuos basados en comportamiento real, no en suposiciones.",
                )]),
            ]),
        ],
    }),
    Block::Card(Card {
        title: "Comunidad Activa",
        sector: "P2-C",
        sections: &[
            Section::Text(Paragraph::body(&[
                Plain("El foco no está solo en crecer audiencia, sino en "),
                Strong("activar comunidad"),
                Plain(":"),
            ])),
            Section::Bullets(&[
                Paragraph::body(&[
                    Plain("Incentivo de "),
                    Strong("UGC"),
                    Plain(" (contenido generado por la audiencia) a partir de sets y dinámicas de Antígona."),
                ]),
                Paragraph::body(&[Plain(
                    "Activaciones diseñadas para fomentar interacción genuina.",
                )]),
                Paragraph::body(&[Plain(
                    "Networking estratégico apoyado en data, detectando perfiles clave (DJs, artistas, curadores) con potencial de colaboración.",
                )]),
            ]),
            Section::Note(Paragraph::body(&[
                Plain("Todo esto se centraliza en un "),
                Strong("dashboard semanal avanzado"),
                Plain(", con lectura clara del rendimiento y proyecciones que permiten anticipar movimientos y oportunidades."),
            ])),
        ],
    }),
    Block::Card(Card {
        title: "Beneficios Cruzados",
        sector: "P2-D",
        sections: &[
            Section::Heading("Antígona × Melt"),
            Section::Text(Paragraph::body(&[
                Plain("Este pack potencia un "),
                Strong("círculo virtuoso"),
                Plain(" entre ambas marcas: La identidad de Antígona, bien definida y percibida, genera interacción y confianza. Esa atención migra naturalmente hacia Melt, impulsando ventas físicas y digitales, participación en eventos y talleres, y fortalecimiento de comunidad."),
            ])),
            Section::Text(Paragraph::body(&[Plain(
                "A su vez, las conexiones que surgen desde la marca personal de Antígona (DJs, playlists, colaboraciones) retroalimentan a Melt, amplificando el buzz local en Buenos Aires y construyendo lealtad sostenida alrededor del proyecto.",
            )])),
            Section::Closing(Paragraph::body(&[
                Plain("El resultado es un ecosistema coherente, donde "),
                Strong("marca personal, data y comunidad trabajan juntas"),
                Plain(" para generar crecimiento real, medible y escalable, alineado con una visión de largo plazo."),
            ])),
        ],
    }),
    Block::Footer("*** END OF TRANSMISSION ***"),
];
