use mfx_domain::catalog::AboutContent;

static ABOUT: AboutContent = AboutContent {
    badge: "Top 1 no Estado do Tocantins",
    paragraphs: &[
        "Somos um time dedicado a transformar palco em experiência imersiva. Do planejamento à execução, cuidamos de cada detalhe para que o seu público sinta o impacto de um grande espetáculo, com segurança, técnica e criatividade.",
        "Atuamos em shows, festivais, casamentos, formaturas, eventos corporativos e qualquer produção que precise de efeitos especiais profissionais para marcar a memória de quem vive a experiência.",
    ],
    specialties: &[
        "Chamas e pirotecnia de palco",
        "Faísca fria para cerimônias",
        "Jatos de CO₂ e fumaça",
        "Papel picado, fogos e efeitos de impacto",
        "Laser holográfico",
    ],
    differentials: &[
        "Equipe treinada e alinhada ao rider técnico",
        "Equipamentos profissionais e revisados",
        "Planejamento integrado com produção",
        "Foco em segurança e impacto visual",
    ],
    image: "/images/equipe/img-equipe-ofc.jpeg",
    certification: "Nossa empresa possui a carteira oficial de Blaster, comprovando treinamento técnico e habilitação legal para manuseio de pirotecnia com segurança total.",
    contact_intro: "Conte um pouco sobre o que você está planejando. Nosso time vai analisar o evento e responder com uma proposta de efeitos especiais sob medida.",
    contact_perks: &[
        "Atendimento para produtores, cerimonialistas e artistas",
        "Projetos personalizados para cada estrutura de palco",
        "Foco total em segurança e impacto visual",
    ],
    contact_note: "*Consulte condições de deslocamento e disponibilidade de datas.",
};

/// Copy for the "about us" and contact introduction sections.
#[must_use]
pub fn about() -> &'static AboutContent {
    &ABOUT
}
