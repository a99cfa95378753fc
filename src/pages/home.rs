use log::info;
use web_sys::window;
use yew::prelude::*;

use crate::components::contact_form::ContactFormView;
use crate::components::typewriter::Typewriter;
use crate::config;
use crate::content::SiteContent;
use crate::scroll::AnchorScroll;

pub const LOGO_SRC: &str = "/assets/logo-savra.svg";

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: SiteContent,
}

fn page_style(content: &SiteContent) -> String {
    let theme = &content.theme;
    format!(
        r#"
        .landing-page {{
            --accent: {accent};
            --accent-alt: {accent_alt};
            min-height: 100vh;
            background: {background};
            color: #fff;
            overflow: hidden;
        }}
        .landing-page section {{ max-width: 72rem; margin: 0 auto; padding: 6rem 1.5rem 2rem; }}
        .hero {{ display: flex; flex-direction: column; align-items: center; text-align: center; }}
        .hero-logo {{ width: 16rem; margin-bottom: 2rem; }}
        .hero-lead {{ font-size: 1.5rem; font-weight: 300; color: #e5e7eb; }}
        .typewriter {{ font-size: 1.9rem; color: var(--accent); min-height: 2.5rem; }}
        .cta-button {{
            display: inline-block;
            margin-top: 3rem;
            padding: 1rem 2.5rem;
            border-radius: 9999px;
            background: linear-gradient(to right, var(--accent), var(--accent-alt));
            color: #fff;
            font-weight: 600;
            text-decoration: none;
        }}
        .service-card {{
            display: flex;
            gap: 1.5rem;
            align-items: center;
            padding: 2.5rem 1.5rem;
            margin-bottom: 1.5rem;
            background: rgba(31, 41, 55, 0.4);
            border-radius: 0.5rem;
            opacity: 0;
            animation: slideIn 0.8s ease-out forwards;
        }}
        @keyframes slideIn {{
            from {{ opacity: 0; transform: translateX(-50px); }}
            to {{ opacity: 1; transform: translateX(0); }}
        }}
        .highlights, .testimonials-grid, .stats-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
            gap: 1.5rem;
        }}
        .highlight, .testimonial, .stat {{ padding: 1.5rem; background: rgba(31, 41, 55, 0.5); border-radius: 0.5rem; }}
        .stat-value {{ font-size: 2.5rem; font-weight: 700; color: var(--accent); }}
        .contact-form {{ display: flex; flex-direction: column; gap: 0.5rem; max-width: 36rem; margin: 0 auto; }}
        .contact-form input, .contact-form textarea {{ padding: 0.75rem; border-radius: 0.5rem; border: none; }}
        .field-error {{ color: #f87171; font-size: 0.875rem; margin: 0; }}
        .form-status.success {{ color: #4ade80; }}
        .form-status.error {{ color: #f87171; }}
        .contact-submit:disabled {{ opacity: 0.6; cursor: not-allowed; }}
        .footer {{ padding: 2rem; text-align: center; color: #d1d5db; }}
        .footer a {{ margin: 0 0.75rem; color: inherit; }}
        .whatsapp-button {{
            position: fixed;
            right: 1.5rem;
            bottom: 1.5rem;
            width: 5rem;
            height: 5rem;
            border-radius: 9999px;
            background: rgb(0, 255, 170);
            box-shadow: 0 0 10px rgb(0, 255, 170);
            display: flex;
            align-items: center;
            justify-content: center;
            z-index: 40;
        }}
        "#,
        accent = theme.accent,
        accent_alt = theme.accent_alt,
        background = theme.background,
    )
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = &props.content;

    // In-page anchors scroll smoothly for as long as the page is mounted.
    use_effect_with_deps(
        |_| {
            let guard = window()
                .and_then(|w| w.document())
                .map(|document| AnchorScroll::attach(&document));
            info!("Home page mounted");
            move || drop(guard)
        },
        (),
    );

    let contact_email = config::get_contact_email();

    html! {
        <div class="landing-page">
            <style>{ page_style(content) }</style>

            <section id="home" class="hero">
                <img src={LOGO_SRC} alt={format!("{} Logo", content.brand)} class="hero-logo" />
                <h2 class="hero-lead">{ content.hero_lead }</h2>
                <Typewriter phrases={content.hero_phrases.clone()} />
                <a href="#contact" class="cta-button">{ content.hero_cta }</a>
            </section>

            <section id="services" class="services">
                {
                    content.services.iter().enumerate().map(|(i, service)| html! {
                        <div class="service-card" style={format!("animation-delay: {:.1}s;", i as f32 * 0.1)}>
                            <i class={format!("service-icon icon-{}", service.icon)}></i>
                            <div>
                                <h3>{ service.title }</h3>
                                <p>{ service.description }</p>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section id="about" class="about">
                <h2>{ content.about_title }</h2>
                <p>{ content.about_text }</p>
                <div class="highlights">
                    {
                        content.highlights.iter().map(|highlight| html! {
                            <div class="highlight">
                                <h3>{ highlight.title }</h3>
                                <p>{ highlight.text }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <h2>{"O que dizem nossos clientes"}</h2>
                <div class="testimonials-grid">
                    {
                        content.testimonials.iter().map(|testimonial| html! {
                            <blockquote class="testimonial">
                                <p>{ format!("“{}”", testimonial.quote) }</p>
                                <footer>
                                    <strong>{ testimonial.author }</strong>
                                    <span>{ format!(" · {}", testimonial.role) }</span>
                                </footer>
                            </blockquote>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="stats" class="stats">
                <div class="stats-grid">
                    {
                        content.stats.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat-value">{ stat.value }</div>
                                <div class="stat-label">{ stat.label }</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="contact" class="contact">
                <h2>{ content.cta_title }</h2>
                <p>{ content.cta_text }</p>
                <ContactFormView />
                <p class="contact-alt">
                    {"Prefere e-mail? "}
                    <a href={format!("mailto:{}", contact_email)}>{"Fale Conosco"}</a>
                </p>
            </section>

            <footer class="footer">
                <p>{ format!("© 2025 {}. Todos os direitos reservados.", content.brand) }</p>
                <div>
                    <a href={format!("mailto:{}", contact_email)}>{"Contato"}</a>
                    <a href="/privacy">{"Política de Privacidade"}</a>
                    <a href="/terms">{"Termos de Serviço"}</a>
                </div>
            </footer>

            <a
                href={format!("https://wa.me/{}", config::get_whatsapp_number())}
                target="_blank"
                rel="noopener noreferrer"
                class="whatsapp-button"
                aria-label="WhatsApp"
            >
                <i class="icon-whatsapp"></i>
            </a>
        </div>
    }
}
