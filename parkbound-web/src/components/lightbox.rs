use yew::prelude::*;

/// One photo in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub caption: AttrValue,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub photos: Vec<Photo>,
    pub index: usize,
    pub on_close: Callback<()>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

/// Full-screen photo viewer with keyboard and click navigation.
#[function_component(Lightbox)]
pub fn lightbox(props: &Props) -> Html {
    let Some(photo) = props.photos.get(props.index) else {
        return Html::default();
    };

    let container_ref = use_node_ref();
    {
        let container_ref = container_ref.clone();
        use_effect_with(props.index, move |_| {
            if let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    let on_keydown = {
        let on_close = props.on_close.clone();
        let on_prev = props.on_prev.clone();
        let on_next = props.on_next.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" => {
                e.prevent_default();
                on_close.emit(());
            }
            "ArrowLeft" => {
                e.prevent_default();
                on_prev.emit(());
            }
            "ArrowRight" => {
                e.prevent_default();
                on_next.emit(());
            }
            _ => {}
        })
    };

    let backdrop_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let nav = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };

    html! {
        <div
            class="lightbox active"
            role="dialog"
            aria-modal="true"
            tabindex="0"
            ref={container_ref}
            onkeydown={on_keydown}
            onclick={backdrop_close}
        >
            <div class="lightbox-content" onclick={stop}>
                <button type="button" class="lightbox-close" aria-label="Close" onclick={nav(&props.on_close)}>{ "×" }</button>
                <button type="button" class="lightbox-prev" aria-label="Previous photo" onclick={nav(&props.on_prev)}>{ "‹" }</button>
                <img src={photo.src.clone()} alt={photo.alt.clone()} />
                <button type="button" class="lightbox-next" aria-label="Next photo" onclick={nav(&props.on_next)}>{ "›" }</button>
                <p class="lightbox-caption">
                    { photo.caption.clone() }
                    <span class="lightbox-counter">
                        { format!("{} / {}", props.index + 1, props.photos.len()) }
                    </span>
                </p>
            </div>
        </div>
    }
}
