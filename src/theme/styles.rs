//! Global CSS styles for Career Theme Park.
//!
//! Bright theme-park palette over a sea-blue map.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --sand: #fffbeb;
  --paper: #ffffff;
  --sea: #bae6fd;
  --sea-deep: #7dd3fc;
  --border: #e2e8f0;

  /* ACCENTS */
  --pink: #ec4899;
  --pink-glow: rgba(236, 72, 153, 0.45);
  --sun: #facc15;
  --violet: #7c3aed;

  /* TEXT */
  --text-primary: #1e293b;
  --text-secondary: #475569;
  --text-muted: #94a3b8;

  /* Typography */
  --font-display: 'Fredoka', 'Baloo 2', 'Trebuchet MS', sans-serif;
  --font-body: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-body);
  background: var(--sand);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
  overflow: hidden;
}

a {
  color: inherit;
  text-decoration: none;
}

.page {
  display: flex;
  flex-direction: column;
  height: 100vh;
}

/* === Navigation Bar === */
.nav-bar {
  background: var(--paper);
  border-bottom: 3px solid var(--sun);
  box-shadow: 0 2px 12px rgba(15, 23, 42, 0.06);
  z-index: 10;
}

.nav-bar__inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1.5rem;
}

.nav-bar__brand {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--violet);
  letter-spacing: 0.02em;
}

.nav-bar__links {
  display: flex;
  gap: 0.5rem;
}

.nav-link {
  padding: 0.4rem 0.9rem;
  border-radius: 999px;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-secondary);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover {
  background: #fef9c3;
  color: var(--text-primary);
}

.nav-link.active {
  background: var(--pink);
  color: var(--paper);
  box-shadow: 0 0 12px var(--pink-glow);
}

/* === Search Bar === */
.search-bar {
  padding: 0.75rem 1.5rem;
  background: var(--sand);
  border-bottom: 1px solid var(--border);
}

.search-bar__inner {
  max-width: 640px;
}

.search-bar__input {
  width: 100%;
  padding: 0.6rem 1rem;
  border: 2px solid var(--border);
  border-radius: 999px;
  background: var(--paper);
  font-family: var(--font-body);
  font-size: var(--text-base);
  color: var(--text-primary);
  outline: none;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.search-bar__input::placeholder {
  color: var(--text-muted);
}

.search-bar__input:focus {
  border-color: var(--pink);
  box-shadow: 0 0 0 3px var(--pink-glow);
}

/* === Career Trail Layout === */
.career-trail__body {
  flex: 1;
  display: grid;
  grid-template-columns: minmax(320px, 400px) 1fr;
  min-height: 0;
}

.career-trail__list {
  overflow-y: auto;
  padding: 1rem;
  border-right: 1px solid var(--border);
}

.career-trail__map {
  position: relative;
  min-height: 0;
}

.career-trail__minimap {
  position: absolute;
  right: 1rem;
  bottom: 1rem;
  width: 220px;
  height: 160px;
  border: 3px solid var(--paper);
  border-radius: 12px;
  overflow: hidden;
  box-shadow: 0 6px 20px rgba(15, 23, 42, 0.25);
  z-index: 5;
}

/* === Trail List === */
.trail-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.trail-list__empty {
  padding: 2rem 1rem;
  text-align: center;
  color: var(--text-muted);
  font-style: italic;
}

/* === Trail Card === */
.trail-card {
  position: relative;
  padding: 1rem 1rem 2.5rem;
  background: var(--paper);
  border: 1px solid var(--border);
  border-radius: 14px;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.trail-card:hover {
  transform: translateY(-2px);
}

.trail-card--unplaced {
  cursor: default;
  opacity: 0.85;
}

.trail-card--unplaced:hover {
  transform: none;
}

.trail-card__header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.trail-card__icon {
  font-size: var(--text-xl);
}

.trail-card__title {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  font-weight: 600;
}

.trail-card__company {
  font-weight: 600;
  color: var(--text-secondary);
}

.trail-card__years,
.trail-card__location {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.trail-card__summary {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.trail-card__badge {
  position: absolute;
  left: 1rem;
  bottom: 0.75rem;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 700;
  color: var(--paper);
}

/* === Career Map === */
.career-map {
  position: absolute;
  inset: 0;
  overflow: hidden;
  background: radial-gradient(circle at 50% 40%, var(--sea) 0%, var(--sea-deep) 100%);
  cursor: grab;
  user-select: none;
}

.career-map.dragging {
  cursor: grabbing;
}

.career-map--compact {
  cursor: default;
}

.career-map__stage {
  position: absolute;
  inset: 0;
  transform-origin: 50% 50%;
  transition: transform 80ms linear;
}

.career-map__backdrop {
  position: absolute;
  inset: 0;
}

/* === Map Markers === */
.map-marker {
  position: absolute;
  width: 22px;
  height: 22px;
  margin-left: -11px;
  margin-top: -11px;
  border: 3px solid;
  border-radius: 50%;
  box-shadow: 0 2px 6px rgba(15, 23, 42, 0.35);
  pointer-events: auto;
}

.map-marker--compact {
  width: 10px;
  height: 10px;
  margin-left: -5px;
  margin-top: -5px;
  border-width: 2px;
}

.map-marker--pulse {
  animation: marker-pulse 900ms ease-out;
  z-index: 2;
}

@keyframes marker-pulse {
  0% { transform: scale(1); }
  50% { transform: scale(1.4); box-shadow: 0 0 18px var(--pink-glow); }
  100% { transform: scale(1); }
}

/* === Coming Soon === */
.coming-soon {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  text-align: center;
}

.coming-soon__title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  color: var(--violet);
}

.coming-soon__text {
  color: var(--text-secondary);
}

.coming-soon__back {
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  background: var(--pink);
  color: var(--paper);
  font-weight: 600;
}
"#;
