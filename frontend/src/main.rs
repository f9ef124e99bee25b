use yew::prelude::*;
use log::info;

use coaching_frontend::components::BeforeAfterReveal;
use coaching_frontend::config;


#[function_component]
fn App() -> Html {
    let settings = use_memo(|_| config::page_settings(), ());

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Lead with clarity, not noise"}</h1>
                    <p class="hero-subtitle">
                        {"One-on-one leadership coaching for managers who are done firefighting."}
                    </p>
                </div>
            </header>

            <BeforeAfterReveal
                title={"What changes in twelve weeks".to_string()}
                settings={(*settings).clone()}
                before={html! {
                    <>
                        <h3>{"Before"}</h3>
                        <ul>
                            <li>{"Every decision routes through you"}</li>
                            <li>{"Calendar full, priorities unclear"}</li>
                            <li>{"Feedback saved for the annual review"}</li>
                        </ul>
                    </>
                }}
                after={html! {
                    <>
                        <h3>{"After"}</h3>
                        <ul>
                            <li>{"Your team decides, you set direction"}</li>
                            <li>{"Three priorities, protected time"}</li>
                            <li>{"Weekly, direct conversations"}</li>
                        </ul>
                    </>
                }}
            />

            <section class="closing-cta">
                <h2>{"Ready for the after?"}</h2>
                <a href="#book" class="hero-cta">{"Book a discovery call"}</a>
            </section>
        </div>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
