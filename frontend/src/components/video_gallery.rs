use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, File, HtmlInputElement};

use crate::dialogs::BrowserDialogs;
use crate::gallery::{self, DeleteOutcome, SubmitOutcome, VideoGallery};
use crate::storage::BrowserStore;

#[function_component(VideoSection)]
pub fn video_section() -> Html {
    let gallery = use_mut_ref(|| VideoGallery::load(BrowserStore::local()));
    let rerender = use_force_update();
    let dragging = use_state(|| false);

    let submit = {
        let gallery = gallery.clone();
        let rerender = rerender.clone();
        Callback::from(move |file: Option<File>| {
            let mime = file.as_ref().map(|f| f.type_());
            if !gallery::accepts_file(mime.as_deref(), &BrowserDialogs) {
                return;
            }
            let Some(file) = file else {
                return;
            };

            let gallery = gallery.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                match gallery::read_as_data_url(&file).await {
                    Ok(data_url) => {
                        let outcome = gallery.borrow_mut().push_encoded(data_url, &BrowserDialogs);
                        if outcome == SubmitOutcome::Stored {
                            rerender.force_update();
                        }
                    }
                    Err(err) => {
                        gloo_console::error!("Failed to read", file.name(), err.to_string());
                    }
                }
            });
        })
    };

    let on_file_change = {
        let submit = submit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            submit.emit(input.files().and_then(|files| files.get(0)));
            // Lets the same file be picked again
            input.set_value("");
        })
    };

    let ondragover = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(true);
        })
    };

    let ondragleave = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);
        })
    };

    let ondrop = {
        let dragging = dragging.clone();
        let submit = submit.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);
            let first = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            if let Some(file) = first {
                submit.emit(Some(file));
            }
        })
    };

    let empty = gallery.borrow().is_empty();
    let items: Html = gallery
        .borrow()
        .items()
        .enumerate()
        .map(|(index, (id, data_url))| {
            let on_delete = {
                let gallery = gallery.clone();
                let rerender = rerender.clone();
                Callback::from(move |_: MouseEvent| {
                    let outcome = gallery.borrow_mut().delete(index, &BrowserDialogs);
                    if outcome == DeleteOutcome::Removed {
                        rerender.force_update();
                    }
                })
            };
            html! {
                <div class="video-item" key={id}>
                    <video
                        src={data_url.to_string()}
                        width="100%"
                        height="250"
                        controls={true}
                        style="object-fit: contain; background: #000;"
                    >
                        {"Your browser does not support the video element."}
                    </video>
                    <button class="delete-video-btn" title="Remove video" onclick={on_delete}>
                        <i class="fas fa-trash"></i>
                    </button>
                </div>
            }
        })
        .collect();

    html! {
        <div class="video-gallery">
            <style>
                {r#"
                    .drop-zone {
                        border: 2px dashed #c9a27e;
                        border-radius: 12px;
                        padding: 2.5rem 1rem;
                        text-align: center;
                        color: #7a6658;
                        transition: background 0.2s ease, border-color 0.2s ease;
                    }
                    .drop-zone.dragover {
                        background: rgba(201, 162, 126, 0.12);
                        border-color: #8a6d5a;
                    }
                    .drop-zone label {
                        color: #8a6d5a;
                        text-decoration: underline;
                        cursor: pointer;
                    }
                    .drop-zone input[type="file"] {
                        display: none;
                    }
                    .video-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .video-empty {
                        text-align: center;
                        color: #a38b7a;
                        margin-top: 2rem;
                    }
                    .video-item {
                        position: relative;
                        border-radius: 8px;
                        overflow: hidden;
                    }
                    .delete-video-btn {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.5rem;
                        background: rgba(0, 0, 0, 0.6);
                        color: #fff;
                        border: none;
                        border-radius: 50%;
                        width: 2.2rem;
                        height: 2.2rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div
                id="drop-zone"
                class={classes!("drop-zone", (*dragging).then(|| "dragover"))}
                {ondragover}
                {ondragleave}
                {ondrop}
            >
                <i class="fas fa-cloud-upload-alt"></i>
                <p>{"Drag a video here, or "}
                    <label>
                        {"browse your files"}
                        <input id="video-upload" type="file" accept="video/*" onchange={on_file_change} />
                    </label>
                </p>
            </div>
            {
                if empty {
                    html! { <p class="video-empty">{"No videos yet. Be the first to add one!"}</p> }
                } else {
                    html! {}
                }
            }
            <div id="video-grid" class="video-grid">
                { items }
            </div>
        </div>
    }
}
