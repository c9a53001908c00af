//! Career Map Component
//!
//! Draws the career world (island backdrop plus zone overlays) and one pin per
//! placeable role, and owns the camera. The same component serves as the
//! compact, non-interactive minimap.
//!
//! The backdrop is built as an SVG string whose `viewBox` follows the camera;
//! pins are absolutely positioned elements on top of it. Other components
//! move the camera by sending [`MapCommand`]s through the [`MapHandle`] given
//! to `on_ready` once the backdrop has loaded.

use std::rc::Rc;
use std::time::{Duration, Instant};

use careermap_core::camera::{Rect, WORLD_MAX, WORLD_MIN};
use careermap_core::map::HIGHLIGHT_DURATION;
use careermap_core::{
    markers_for, Camera, CameraAnimation, DecoratedRole, MapCommand, MapHandle, Marker, RoleId,
    Viewport, WorldMap, ZONE_THEMES,
};
use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use futures::StreamExt;

use crate::context::use_config;
use crate::theme::colors::{MARKER_BORDER, MARKER_PINK, WORLD_EDGE, WORLD_FILL, WORLD_OUTLINE};

const FRAME: Duration = Duration::from_millis(16);

/// Wheel pixels per zoom level
const WHEEL_PIXELS_PER_ZOOM: f64 = 500.0;

// ---------------------------------------------------------------------------
// SVG builder
// ---------------------------------------------------------------------------

/// Build the backdrop SVG for the visible part of the world.
fn build_backdrop_svg(world: &WorldMap, view: Rect) -> String {
    let mut svg = String::with_capacity(8192);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" preserveAspectRatio="none" style="position:absolute;top:0;left:0;width:100%;height:100%;">"#,
        view.x, view.y, view.width, view.height
    ));

    let size = WORLD_MAX - WORLD_MIN;
    svg.push_str(&format!(
        r#"<rect x="{WORLD_MIN}" y="{WORLD_MIN}" width="{size}" height="{size}" fill="none" stroke="{WORLD_EDGE}" stroke-width="1" stroke-dasharray="4 4" vector-effect="non-scaling-stroke"/>"#
    ));

    for shape in world.world_shapes() {
        let d = shape.svg_path();
        svg.push_str(&format!(
            r#"<path d="{d}" fill="{WORLD_FILL}" fill-opacity="0.9" fill-rule="evenodd"/>"#
        ));
        svg.push_str(&format!(
            r#"<path d="{d}" fill="none" stroke="{WORLD_OUTLINE}" stroke-width="3" vector-effect="non-scaling-stroke"/>"#
        ));
    }

    for theme in ZONE_THEMES.iter() {
        let color = theme.color;
        for shape in world.zone_shapes(theme.id) {
            let d = shape.svg_path();
            svg.push_str(&format!(
                r#"<path d="{d}" fill="{color}" fill-opacity="0.25" fill-rule="evenodd"/>"#
            ));
            svg.push_str(&format!(
                r#"<path d="{d}" fill="none" stroke="{color}" stroke-width="2" vector-effect="non-scaling-stroke"/>"#
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Position a pin over its map position
fn marker_style(camera: &Camera, marker: &Marker, viewport: Viewport) -> String {
    let (x, y) = camera.project(marker.at, viewport);
    format!("left: {x}px; top: {y}px; background: {MARKER_PINK}; border-color: {MARKER_BORDER};")
}

/// Stage tilt and rotation for the camera's pitch and bearing
fn stage_transform(camera: &Camera) -> String {
    format!(
        "transform: perspective(1400px) rotateX({}deg) rotateZ({}deg);",
        camera.pitch, -camera.bearing
    )
}

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

// ---------------------------------------------------------------------------
// Camera animation
// ---------------------------------------------------------------------------

/// Run `animation` frame by frame until it ends or a newer one starts.
fn start_animation(mut camera: Signal<Camera>, mut generation: Signal<u64>, animation: CameraAnimation) {
    generation += 1;
    let this_run = *generation.peek();

    spawn(async move {
        let started = Instant::now();
        loop {
            if *generation.peek() != this_run {
                return;
            }
            let elapsed = started.elapsed();
            camera.set(animation.sample(elapsed));
            if animation.is_finished(elapsed) {
                return;
            }
            tokio::time::sleep(FRAME).await;
        }
    });
}

async fn measure(element: &MountedData) -> Option<(Viewport, (f64, f64))> {
    let rect = element.get_client_rect().await.ok()?;
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    Some((
        Viewport::new(rect.width(), rect.height()),
        (rect.origin.x, rect.origin.y),
    ))
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn CareerMap(
    /// Roles to pin; roles without a usable position are skipped
    roles: Vec<DecoratedRole>,
    /// Minimap mode: smaller pins, flat camera, no interaction
    #[props(default = false)]
    compact: bool,
    /// Receives the command handle once the map is initialized
    #[props(default)]
    on_ready: Option<EventHandler<MapHandle>>,
) -> Element {
    let config = use_config();

    let mut camera = use_signal(move || if compact { Camera::compact() } else { Camera::full() });
    let mut viewport = use_signal(Viewport::default);
    let mut origin = use_signal(|| (0.0_f64, 0.0_f64));
    let mut element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut world = use_signal(WorldMap::default);
    let generation = use_signal(|| 0_u64);
    let mut highlighted: Signal<Option<(RoleId, u64)>> = use_signal(|| None);

    // Drag state
    let mut dragging = use_signal(|| false);
    let mut last_pointer = use_signal(|| (0.0_f64, 0.0_f64));

    // Pins are rebuilt whenever the role list changes
    let markers = use_memo(use_reactive((&roles,), |(roles,)| markers_for(&roles)));

    // Camera commands from the page
    let commands = use_coroutine(move |mut rx: UnboundedReceiver<MapCommand>| async move {
        let mut pulses = 0_u64;
        while let Some(command) = rx.next().await {
            if let MapCommand::Highlight { id } = command {
                if !markers.peek().iter().any(|m| m.id == id) {
                    tracing::debug!(role = %id, "No marker mounted for role, skipping highlight");
                    continue;
                }
                pulses += 1;
                let pulse = pulses;
                highlighted.set(Some((id, pulse)));
                spawn(async move {
                    tokio::time::sleep(HIGHLIGHT_DURATION).await;
                    if highlighted.peek().as_ref().map(|(_, p)| *p) == Some(pulse) {
                        highlighted.set(None);
                    }
                });
                continue;
            }

            // Pick up window resizes before computing the target
            let mounted = element.peek().clone();
            if let Some(mounted) = mounted {
                if let Some((size, at)) = measure(&mounted).await {
                    viewport.set(size);
                    origin.set(at);
                }
            }

            let current = *camera.peek();
            if let Some((target, duration)) = command.camera_target(&current, *viewport.peek()) {
                start_animation(camera, generation, CameraAnimation::new(current, target, duration));
            }
        }
    });

    // Load the backdrop, then hand out the command handle
    let world_source = config.world.clone();
    use_effect(move || {
        let source = world_source.clone();
        spawn(async move {
            match WorldMap::load(&source).await {
                Ok(loaded) => world.set(loaded),
                Err(e) => tracing::warn!(source = %source, error = %e, "Backdrop unavailable, drawing pins only"),
            }
            if let Some(on_ready) = on_ready {
                on_ready.call(MapHandle::new(commands.tx()));
            }
        });
    });

    let cam = camera();
    let vp = viewport();
    let svg_html = build_backdrop_svg(&world.read(), cam.visible_rect(vp));
    let pulse = highlighted();

    let container_class = match (compact, dragging()) {
        (true, _) => "career-map career-map--compact",
        (false, true) => "career-map dragging",
        (false, false) => "career-map",
    };

    rsx! {
        div {
            class: "{container_class}",

            onmounted: move |evt: MountedEvent| async move {
                let data = evt.data();
                if let Some((size, at)) = measure(&data).await {
                    viewport.set(size);
                    origin.set(at);
                }
                element.set(Some(data));
            },

            onwheel: move |evt: Event<WheelData>| {
                if compact {
                    return;
                }
                evt.prevent_default();
                let delta = -wheel_delta_y(evt.data().delta()) / WHEEL_PIXELS_PER_ZOOM;
                let client = evt.data().client_coordinates();
                let (ox, oy) = origin();
                let anchor = (client.x - ox, client.y - oy);
                let mut generation = generation;
                generation += 1;
                camera.set(camera().zoomed_around(delta, anchor, viewport()));
            },

            onmousedown: move |evt: Event<MouseData>| {
                if compact || evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let client = evt.client_coordinates();
                let mut generation = generation;
                generation += 1;
                dragging.set(true);
                last_pointer.set((client.x, client.y));
            },

            onmousemove: move |evt: Event<MouseData>| {
                if !dragging() {
                    return;
                }
                let client = evt.client_coordinates();
                let (lx, ly) = last_pointer();
                camera.set(camera().panned_by(client.x - lx, client.y - ly));
                last_pointer.set((client.x, client.y));
            },

            onmouseup: move |_| dragging.set(false),
            onmouseleave: move |_| dragging.set(false),

            div { class: "career-map__stage", style: "{stage_transform(&cam)}",
                div { class: "career-map__backdrop", dangerous_inner_html: "{svg_html}" }

                for marker in markers.read().iter() {
                    {
                        let pulsing = pulse.as_ref().filter(|(id, _)| *id == marker.id).map(|(_, p)| *p);
                        let key = match pulsing {
                            Some(p) => format!("{}-{}", marker.id, p),
                            None => marker.id.to_string(),
                        };
                        let class = match (compact, pulsing.is_some()) {
                            (true, _) => "map-marker map-marker--compact",
                            (false, true) => "map-marker map-marker--pulse",
                            (false, false) => "map-marker",
                        };
                        rsx! {
                            div {
                                key: "{key}",
                                class: "{class}",
                                style: "{marker_style(&cam, marker, vp)}",
                                title: "{marker.title}",
                                "data-marker-id": "{marker.id}",
                            }
                        }
                    }
                }
            }
        }
    }
}
