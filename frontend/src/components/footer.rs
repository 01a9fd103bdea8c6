use yew::prelude::*;

use crate::config;
use crate::content::{BRAND, FOOTER_COLUMNS};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <img src={config::LOGO_PATH} alt={BRAND} class="footer-logo" loading="lazy" />
                    <p>{"Elevating Interiors Across Delhi Since 2018. We create spaces that blend functionality with artistic vision."}</p>
                </div>
                { for FOOTER_COLUMNS.iter().map(|column| html! {
                    <div class="footer-column">
                        <h4>{column.heading}</h4>
                        <ul>
                            { for column.links.iter().map(|link| html! {
                                <li><a href={link.href}>{link.label}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-bottom">
                <p>{format!("© 2026 {}. All Rights Reserved. | Designed with ❤️ in Delhi", BRAND)}</p>
            </div>
        </footer>
    }
}
