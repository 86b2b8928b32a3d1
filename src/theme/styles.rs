//! Global CSS styles for the Orbgate portal.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #060913;
  --night-panel: rgba(13, 18, 34, 0.88);
  --night-border: rgba(126, 246, 214, 0.14);

  /* AURORA (Accents) */
  --aurora-teal: #7ef6d6;
  --aurora-blue: #6ea8ff;
  --aurora-violet: #a78bfa;

  /* TEXT */
  --text-primary: #e8ecf8;
  --text-secondary: rgba(232, 236, 248, 0.7);
  --text-muted: rgba(232, 236, 248, 0.45);

  /* Typography */
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

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
}

body {
  font-family: var(--font-mono);
  background: var(--night);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Portal layout === */
.portal {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.portal.modal-open {
  overflow: hidden;
  height: 100vh;
}

/* === Orb background layer === */
.orb-layer {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.orb {
  position: absolute;
  border-radius: 50%;
  will-change: left, top;
}

/* === Portal card === */
.portal-card {
  position: relative;
  z-index: 1;
  width: min(420px, 92vw);
  padding: 2.5rem 2.25rem;
  background: var(--night-panel);
  border: 1px solid var(--night-border);
  border-radius: 14px;
  backdrop-filter: blur(14px);
  box-shadow: 0 18px 60px rgba(0, 0, 0, 0.45);
}

.portal-title {
  font-size: 1.8rem;
  font-weight: 600;
  letter-spacing: 0.12em;
  color: var(--aurora-teal);
  text-shadow: 0 0 24px rgba(126, 246, 214, 0.35);
}

.portal-tagline {
  margin-top: 0.25rem;
  margin-bottom: 1.75rem;
  font-size: 0.85rem;
  color: var(--text-muted);
}

/* === Form === */
.portal-form {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.portal-label {
  font-size: 0.75rem;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--text-secondary);
}

.portal-row {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.portal-input {
  flex: 1;
  width: 100%;
  padding: 0.65rem 0.8rem;
  font-family: inherit;
  font-size: 0.95rem;
  color: var(--text-primary);
  background: rgba(255, 255, 255, 0.04);
  border: 1px solid var(--night-border);
  border-radius: 8px;
  outline: none;
  transition: border-color var(--transition-fast);
}

.portal-input:focus {
  border-color: var(--aurora-teal);
}

.portal-agree {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin: 0.9rem 0;
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.portal-agree input[type="checkbox"] {
  accent-color: var(--aurora-teal);
}

.terms-link {
  background: none;
  border: none;
  padding: 0;
  font: inherit;
  color: var(--aurora-blue);
  text-decoration: underline;
  cursor: pointer;
}

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-ghost {
  font-family: inherit;
  font-size: 0.9rem;
  padding: 0.65rem 1.1rem;
  border-radius: 8px;
  cursor: pointer;
  transition: filter var(--transition-fast), opacity var(--transition-fast);
}

.btn-primary {
  color: var(--night);
  background: linear-gradient(135deg, var(--aurora-teal), var(--aurora-blue));
  border: none;
  font-weight: 600;
}

.btn-secondary {
  color: var(--text-primary);
  background: rgba(255, 255, 255, 0.05);
  border: 1px solid var(--night-border);
}

.btn-ghost {
  color: var(--aurora-teal);
  background: none;
  border: 1px solid var(--aurora-teal);
  white-space: nowrap;
  min-width: 6.5rem;
}

.btn-primary:hover, .btn-secondary:hover, .btn-ghost:hover {
  filter: brightness(1.15);
}

.btn-primary:disabled, .btn-ghost:disabled {
  opacity: 0.55;
  cursor: default;
  filter: none;
}

/* === Status line === */
.portal-msg {
  min-height: 1.4rem;
  margin-top: 0.75rem;
  font-size: 0.85rem;
}

/* === Terms modal === */
.terms-modal {
  position: fixed;
  inset: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: center;
}

.terms-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(3, 5, 10, 0.7);
  backdrop-filter: blur(3px);
}

.terms-panel {
  position: relative;
  width: min(520px, 94vw);
  max-height: 80vh;
  display: flex;
  flex-direction: column;
  background: var(--night-panel);
  border: 1px solid var(--night-border);
  border-radius: 12px;
  box-shadow: 0 24px 80px rgba(0, 0, 0, 0.6);
}

.terms-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.1rem 1.4rem;
  border-bottom: 1px solid var(--night-border);
}

.terms-title {
  font-size: 1.1rem;
  font-weight: 600;
  color: var(--aurora-teal);
}

.terms-close {
  background: none;
  border: none;
  font-size: 1.5rem;
  line-height: 1;
  color: var(--text-secondary);
  cursor: pointer;
}

.terms-close:hover {
  color: var(--text-primary);
}

.terms-body {
  padding: 1.2rem 1.4rem;
  overflow-y: auto;
  font-size: 0.9rem;
  color: var(--text-secondary);
  display: flex;
  flex-direction: column;
  gap: 0.8rem;
}

.terms-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.6rem;
  padding: 1rem 1.4rem;
  border-top: 1px solid var(--night-border);
}

/* === Arrival === */
.arrival-card {
  text-align: center;
}

.arrival-back {
  display: inline-block;
  margin-top: 1.25rem;
  text-decoration: none;
}
"#;
