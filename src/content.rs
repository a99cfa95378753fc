/// Which of the two page variants to render. Both share one component tree and
/// differ only in copy and accent colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteVariant {
    Classic,
    Showcase,
}

impl SiteVariant {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "showcase" | "b" => SiteVariant::Showcase,
            _ => SiteVariant::Classic,
        }
    }

    pub fn content(self) -> SiteContent {
        match self {
            SiteVariant::Classic => classic(),
            SiteVariant::Showcase => showcase(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub accent: &'static str,
    pub accent_alt: &'static str,
    pub background: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub brand: &'static str,
    pub hero_lead: &'static str,
    pub hero_phrases: Vec<&'static str>,
    pub hero_cta: &'static str,
    pub services: Vec<Service>,
    pub about_title: &'static str,
    pub about_text: &'static str,
    pub highlights: Vec<Highlight>,
    pub testimonials: Vec<Testimonial>,
    pub stats: Vec<Stat>,
    pub cta_title: &'static str,
    pub cta_text: &'static str,
    pub theme: Theme,
}

fn services() -> Vec<Service> {
    vec![
        Service {
            title: "Sistemas Web Personalizados",
            description: "Plataformas escaláveis e otimizadas, desenvolvidas com tecnologia de ponta para impulsionar sua produtividade.",
            icon: "code",
        },
        Service {
            title: "Páginas e Landing Pages",
            description: "Designs profissionais e otimizados para maximizar conversões e fortalecer sua marca digital.",
            icon: "globe",
        },
        Service {
            title: "Aplicativos Mobile",
            description: "Aplicativos intuitivos para iOS e Android, projetados para desempenho e engajamento.",
            icon: "mobile",
        },
        Service {
            title: "Automações Inteligentes",
            description: "Soluções automatizadas para otimizar processos e reduzir custos operacionais.",
            icon: "bulb",
        },
        Service {
            title: "Extração de Dados",
            description: "Extração e análise de dados para insights estratégicos e decisões informadas.",
            icon: "calendar",
        },
        Service {
            title: "Dashboards Interativos",
            description: "Ferramentas visuais para monitoramento em tempo real de KPIs e desempenho.",
            icon: "chart",
        },
        Service {
            title: "Gestão de Tráfego",
            description: "Estratégias avançadas para aumentar visibilidade e conversões online.",
            icon: "trending",
        },
    ]
}

fn highlights() -> Vec<Highlight> {
    vec![
        Highlight { title: "Soluções Personalizadas", text: "Projetos sob medida para suas necessidades específicas." },
        Highlight { title: "Equipe Experiente", text: "Profissionais com expertise em tecnologia avançada." },
        Highlight { title: "Tecnologia de Ponta", text: "Ferramentas modernas para soluções eficientes." },
        Highlight { title: "Suporte Contínuo", text: "Acompanhamento dedicado para seu sucesso." },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "O novo sistema reduziu pela metade o tempo que gastávamos com planilhas.",
            author: "Mariana Lopes",
            role: "Diretora de Operações",
        },
        Testimonial {
            quote: "A landing page dobrou nossas conversões no primeiro mês.",
            author: "Rafael Nunes",
            role: "Fundador, Loja Nunes",
        },
        Testimonial {
            quote: "Atendimento próximo e entregas sempre dentro do prazo.",
            author: "Carla Mendes",
            role: "Gerente de Marketing",
        },
    ]
}

fn stats() -> Vec<Stat> {
    vec![
        Stat { value: "120+", label: "Projetos entregues" },
        Stat { value: "98%", label: "Clientes satisfeitos" },
        Stat { value: "7", label: "Anos de mercado" },
        Stat { value: "24h", label: "Tempo médio de resposta" },
    ]
}

fn classic() -> SiteContent {
    SiteContent {
        brand: "Savra",
        hero_lead: "Transformando negócios com",
        hero_phrases: vec![
            "inovação para empresas de todos os tamanhos",
            "soluções web e mobile sob medida",
            "automações e dashboards para o futuro",
            "gestão de tráfego para maximizar resultados",
        ],
        hero_cta: "Agendar Reunião",
        services: services(),
        about_title: "Por Que Escolher a Savra?",
        about_text: "Especialistas em transformar ideias em soluções tecnológicas que impulsionam o crescimento, com foco em inovação e resultados.",
        highlights: highlights(),
        testimonials: testimonials(),
        stats: stats(),
        cta_title: "Transforme Sua Empresa com Tecnologia",
        cta_text: "Descubra como nossas soluções inovadoras podem impulsionar seu negócio. Entre em contato agora!",
        theme: Theme {
            accent: "#a855f7",
            accent_alt: "#2563eb",
            background: "linear-gradient(to bottom, #000000, #581c87, #111827)",
        },
    }
}

fn showcase() -> SiteContent {
    SiteContent {
        hero_lead: "Tecnologia sob medida para",
        hero_phrases: vec![
            "acelerar o crescimento da sua empresa",
            "conectar você aos seus clientes",
            "automatizar o que toma o seu tempo",
        ],
        hero_cta: "Fale com um especialista",
        cta_title: "Pronto para o próximo passo?",
        theme: Theme {
            accent: "#38bdf8",
            accent_alt: "#7c3aed",
            background: "linear-gradient(to bottom, #020617, #1e3a8a, #0f172a)",
        },
        ..classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_resolve_with_classic_fallback() {
        assert_eq!(SiteVariant::from_name("showcase"), SiteVariant::Showcase);
        assert_eq!(SiteVariant::from_name(" Showcase "), SiteVariant::Showcase);
        assert_eq!(SiteVariant::from_name("classic"), SiteVariant::Classic);
        assert_eq!(SiteVariant::from_name("unknown"), SiteVariant::Classic);
    }

    #[test]
    fn variants_share_services_but_not_theme() {
        let classic = SiteVariant::Classic.content();
        let showcase = SiteVariant::Showcase.content();
        assert_eq!(classic.services, showcase.services);
        assert_eq!(classic.services.len(), 7);
        assert_ne!(classic.theme, showcase.theme);
        assert!(!showcase.hero_phrases.is_empty());
    }
}
