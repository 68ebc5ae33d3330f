use mfx_domain::catalog::{CardFlags, PortfolioItem};

const FEATURED: CardFlags = CardFlags::FEATURED.union(CardFlags::PRIORITY);

static PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem {
        image: "/images/shows/show-3.jpg",
        alt: "Grande queima de fogos em festival",
        title: "Turnês e Festivais",
        description: "Estruturas completas de efeitos especiais para acompanhar artistas e grandes festivais pelo Brasil. Soluções de alto impacto.",
        flags: FEATURED,
    },
    PortfolioItem {
        image: "/images/casamentos/casamento-1.png",
        alt: "Cerimônia de casamento com faíscas frias",
        title: "Casamentos",
        description: "Charme e elegância com sparkles para momentos íntimos.",
        flags: CardFlags::PRIORITY,
    },
    PortfolioItem {
        image: "/images/shows/show-5.jpg",
        alt: "DJ com máquinas de fogo no palco",
        title: "Eletrônico",
        description: "Sincronia perfeita entre beats e chamas.",
        flags: CardFlags::PRIORITY,
    },
    PortfolioItem {
        image: "/images/shows/show-6.JPG",
        alt: "Show com painéis de LED e efeitos de fumaça",
        title: "Grandes Produções",
        description: "Integração total entre luz, vídeo e efeitos atmosféricos para criar profundidade de palco.",
        flags: FEATURED,
    },
    PortfolioItem {
        image: "/images/shows/show-1.png",
        alt: "Show indoor com pirotecnia",
        title: "Corporativo & Indoor",
        description: "Efeitos seguros e controlados para ambientes fechados, garantindo o espetáculo sem riscos.",
        flags: FEATURED,
    },
    PortfolioItem {
        image: "/images/shows/show-balsas.JPG",
        alt: "Detalhe de efeito especial",
        title: "Efeitos Especiais",
        description: "Detalhes que fazem a diferença na composição visual.",
        flags: CardFlags::PRIORITY,
    },
];

/// Portfolio cards, in grid order.
#[must_use]
pub fn portfolio() -> &'static [PortfolioItem] {
    &PORTFOLIO
}
