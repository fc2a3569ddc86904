use yew::prelude::*;

use crate::components::lightbox::{Lightbox, Photo};
use crate::dom;

/// Relative path, alt text, caption.
const PHOTO_SOURCES: [(&str, &str, &str); 8] = [
    (
        "photos/steel-vengeance-lift.jpg",
        "Steel Vengeance lift hill against a clear sky",
        "Steel Vengeance, 8am ERT. Worth the flight alone.",
    ),
    (
        "photos/geforce-airtime.jpg",
        "Expedition GeForce train cresting the first airtime hill",
        "GeForce's second hill. The camera survived, barely.",
    ),
    (
        "photos/taron-night.jpg",
        "Taron launching through Klugheim at night",
        "Taron at closing time, when the rockwork starts glowing.",
    ),
    (
        "photos/helix-sunset.jpg",
        "Helix wrapped around the Liseberg mountainside at sunset",
        "Helix at golden hour. Gothenburg showing off.",
    ),
    (
        "photos/zadra-structure.jpg",
        "Zadra's hybrid structure from the midway",
        "Zadra's lattice. Half wood, half steel, all intimidating.",
    ),
    (
        "photos/wodan-station.jpg",
        "Wodan station building at Europa-Park",
        "Wodan's station. The theming budget was not small.",
    ),
    (
        "photos/karnan-tower.jpg",
        "Kärnan tower looming over Hansa-Park",
        "Kärnan from the queue. That backwards drop in the tower is mean.",
    ),
    (
        "photos/olympia-looping-fair.jpg",
        "Olympia Looping's five loops at the fairground",
        "Olympia Looping, built up in a week. Travelling coasters are unreal.",
    ),
];

/// The photo gallery. Clicking a thumbnail opens the lightbox.
#[function_component(Photos)]
pub fn photos() -> Html {
    let photos: Vec<Photo> = PHOTO_SOURCES
        .iter()
        .map(|(path, alt, caption)| Photo {
            src: AttrValue::from(dom::asset_path(path)),
            alt: AttrValue::from(*alt),
            caption: AttrValue::from(*caption),
        })
        .collect();

    let open: UseStateHandle<Option<usize>> = use_state(|| None);

    let on_open = |index: usize| {
        let open = open.clone();
        Callback::from(move |_| open.set(Some(index)))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |()| open.set(None))
    };
    let step = |delta: isize| {
        let open = open.clone();
        let len = photos.len() as isize;
        Callback::from(move |()| {
            if let Some(current) = *open {
                let next = (current as isize + delta).rem_euclid(len) as usize;
                open.set(Some(next));
            }
        })
    };

    html! {
        <div class="photos-page">
            <h1>{ "Park Photos" }</h1>
            <div class="photo-grid">
                { for photos.iter().enumerate().map(|(index, photo)| html! {
                    <button
                        type="button"
                        class="photo-thumb"
                        key={photo.src.to_string()}
                        onclick={on_open(index)}
                    >
                        <img src={photo.src.clone()} alt={photo.alt.clone()} loading="lazy" />
                    </button>
                }) }
            </div>
            { (*open).map(|index| html! {
                <Lightbox
                    photos={photos.clone()}
                    {index}
                    on_close={on_close.clone()}
                    on_prev={step(-1)}
                    on_next={step(1)}
                />
            }) }
        </div>
    }
}
