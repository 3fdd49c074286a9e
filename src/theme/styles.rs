//! Global CSS styles for Keepsake.
//!
//! Soft pink paper aesthetic: blush backgrounds, handwritten headings,
//! white polaroid frames and pastel sticky notes.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BLUSH (Backgrounds) */
  --blush: #fff0f5;
  --blush-deep: #ffe4ec;
  --blush-border: #f9c6d6;

  /* ROSE (Accents, Hearts) */
  --rose: #ec4899;
  --rose-deep: #db2777;
  --rose-glow: rgba(236, 72, 153, 0.25);
  --heart-red: #ef4444;
  --heart-purple: #a855f7;

  /* PAPER */
  --paper: #fffdf8;
  --paper-line: #f3e8d8;
  --kraft: #e8c9a0;

  /* NOTES */
  --note-sunshine: linear-gradient(135deg, #fef9c3, #fde68a);
  --note-lavender: linear-gradient(135deg, #f3e8ff, #ddd6fe);
  --note-sky: linear-gradient(135deg, #e0f2fe, #bae6fd);

  /* TEXT */
  --text-primary: #3f2a36;
  --text-secondary: rgba(63, 42, 54, 0.75);
  --text-muted: rgba(63, 42, 54, 0.5);

  /* Typography */
  --font-hand: 'Comic Neue', 'Patrick Hand', 'Comic Sans MS', cursive;
  --font-serif: 'Cormorant Garamond', Georgia, serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 800ms cubic-bezier(0.4, 0, 0.2, 1);
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
  font-family: var(--font-hand);
  background: linear-gradient(180deg, var(--blush) 0%, var(--blush-deep) 100%);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
  background: none;
}

/* === Typography === */
.section-title {
  font-size: 1.75rem;
  font-weight: 700;
  color: var(--rose-deep);
  text-align: center;
}

.section-subtitle {
  font-size: 1.1rem;
  color: var(--text-secondary);
  text-align: center;
  margin-bottom: 1.5rem;
}

.section-icon {
  width: 4.5rem;
  height: 4.5rem;
  margin: 0 auto 1rem;
  border-radius: 50%;
  background: var(--blush-deep);
  border: 4px solid white;
  box-shadow: 0 6px 16px var(--rose-glow);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.75rem;
}

/* === Envelope Intro === */
.intro {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2rem;
  position: relative;
}

.intro-glow {
  position: absolute;
  inset: 0;
  background: radial-gradient(circle at 50% 45%, var(--rose-glow), transparent 60%);
  pointer-events: none;
}

.envelope {
  position: relative;
  width: 320px;
  height: 210px;
  cursor: pointer;
  perspective: 900px;
  transition: transform var(--transition-normal);
}

.envelope:hover {
  transform: translateY(-4px) scale(1.02);
}

.envelope-back,
.envelope-front {
  position: absolute;
  inset: 0;
  border-radius: 10px;
}

.envelope-back {
  background: var(--kraft);
}

.envelope-front {
  background:
    linear-gradient(30deg, transparent 49.5%, #dcb88a 50%) left bottom / 50% 100% no-repeat,
    linear-gradient(-30deg, transparent 49.5%, #dcb88a 50%) right bottom / 50% 100% no-repeat;
  z-index: 3;
}

.envelope-flap {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 60%;
  background: #d4a574;
  clip-path: polygon(0 0, 100% 0, 50% 100%);
  transform-origin: top;
  transition: transform 600ms ease-in-out, z-index 0s 300ms;
  z-index: 4;
}

.envelope.open .envelope-flap {
  transform: rotateX(180deg);
  z-index: 1;
}

.envelope-letter {
  position: absolute;
  left: 8%;
  right: 8%;
  top: 10%;
  height: 80%;
  background: var(--paper);
  border-radius: 6px;
  padding: 1rem;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
  transition: transform 700ms 300ms ease-out;
  z-index: 2;
}

.envelope.open .envelope-letter {
  transform: translateY(-55%);
}

.envelope-preview-to {
  font-weight: 700;
  color: var(--rose-deep);
}

.envelope-preview {
  color: var(--text-secondary);
  font-size: 0.95rem;
}

.wax-seal {
  position: absolute;
  left: 50%;
  top: 52%;
  width: 48px;
  height: 48px;
  margin-left: -24px;
  border-radius: 50%;
  background: radial-gradient(circle at 35% 35%, #f87171, #b91c1c);
  color: white;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.4rem;
  box-shadow: 0 3px 8px rgba(0, 0, 0, 0.25);
  z-index: 5;
  transition: opacity var(--transition-normal);
}

.envelope.open .wax-seal {
  opacity: 0;
}

.envelope-hint {
  color: var(--rose-deep);
  font-size: 1.2rem;
  animation: hint-bob 2s ease-in-out infinite;
}

@keyframes hint-bob {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-6px); }
}

/* === Main Card Page === */
.card-page {
  min-height: 100vh;
  padding: 3rem 1.25rem 4rem;
  position: relative;
}

.card-content {
  max-width: 720px;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 3rem;
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.card-footer {
  text-align: center;
  color: var(--text-muted);
}

/* === Greeting === */
.greeting {
  text-align: center;
}

.greeting-name {
  font-size: 2.75rem;
  color: var(--rose);
  text-shadow: 0 4px 18px var(--rose-glow);
}

.greeting-message {
  font-size: 1.25rem;
  color: var(--text-secondary);
}

/* === Letter === */
.letter-card {
  background: var(--paper);
  border: 2px solid var(--blush-border);
  border-radius: 1.5rem;
  padding: 2rem;
  text-align: center;
  cursor: pointer;
  box-shadow: 0 12px 30px var(--rose-glow);
  transition: transform var(--transition-fast);
}

.letter-card:hover {
  transform: translateY(-3px);
}

.letter-card-icon {
  font-size: 2.5rem;
  margin-bottom: 0.5rem;
}

.letter-overlay {
  position: fixed;
  inset: 0;
  background: rgba(63, 42, 54, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  z-index: 100;
  animation: fade-in var(--transition-normal);
}

.letter-paper {
  position: relative;
  max-width: 560px;
  max-height: 85vh;
  overflow-y: auto;
  background:
    repeating-linear-gradient(transparent, transparent 31px, var(--paper-line) 32px),
    var(--paper);
  border-radius: 1rem;
  padding: 2.5rem 2rem;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.25);
  animation: letter-rise 500ms ease-out;
}

.letter-close {
  position: absolute;
  top: 0.75rem;
  right: 1rem;
  font-size: 1.75rem;
  color: var(--text-muted);
}

.letter-close:hover {
  color: var(--rose-deep);
}

.letter-recipient {
  font-size: 1.4rem;
  font-weight: 700;
  color: var(--rose-deep);
  margin-bottom: 1rem;
}

.letter-paragraph {
  margin-bottom: 1rem;
  line-height: 2rem;
}

.letter-signature {
  text-align: right;
  font-style: italic;
  color: var(--rose-deep);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes letter-rise {
  from { opacity: 0; transform: translateY(40px) scale(0.96); }
  to { opacity: 1; transform: translateY(0) scale(1); }
}

/* === Polaroid Gallery === */
.gallery-section,
.playlist-section {
  background: linear-gradient(135deg, #ffffff, #fff7ed);
  border: 2px solid #fde2c4;
  border-radius: 1.75rem;
  padding: 2rem 1.5rem;
  box-shadow: 0 16px 40px rgba(0, 0, 0, 0.08);
}

.polaroid-strip {
  display: flex;
  gap: 1.5rem;
  overflow-x: auto;
  padding: 1rem 0.5rem 1.5rem;
  scroll-behavior: smooth;
}

.polaroid-strip::-webkit-scrollbar {
  display: none;
}

.polaroid {
  flex: none;
  width: 260px;
  background: white;
  padding: 0.9rem 0.9rem 1.25rem;
  border-radius: 0.75rem;
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.12);
  transition: transform var(--transition-normal);
}

.polaroid:hover {
  transform: rotate(0deg) scale(1.04) !important;
}

.polaroid-frame {
  position: relative;
  background: #f3f4f6;
  border-radius: 0.5rem;
}

.polaroid-frame img {
  display: block;
  width: 100%;
  aspect-ratio: 4 / 5;
  object-fit: contain;
  border-radius: 0.5rem;
}

.polaroid-heart {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  width: 1.75rem;
  height: 1.75rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.9);
  color: var(--heart-red);
  display: flex;
  align-items: center;
  justify-content: center;
}

.polaroid-caption {
  margin-top: 0.75rem;
  text-align: center;
  font-size: 1.05rem;
}

/* === Flip Notes === */
.notes-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 1.25rem;
}

.flip-note {
  perspective: 1000px;
  cursor: pointer;
  user-select: none;
  min-height: 140px;
  filter: drop-shadow(0 4px 8px rgba(0, 0, 0, 0.1));
}

.flip-note-inner {
  position: relative;
  width: 100%;
  height: 100%;
  min-height: 140px;
  transform-style: preserve-3d;
  transition: transform 600ms ease-in-out;
}

.flip-note-inner.flipped {
  transform: rotateY(180deg);
}

.flip-note-front,
.flip-note-back {
  position: absolute;
  inset: 0;
  border-radius: 1rem;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  backface-visibility: hidden;
}

.flip-note-back {
  background: linear-gradient(135deg, #fce7f3, #fbcfe8);
  transform: rotateY(180deg);
}

.note-sunshine { background: var(--note-sunshine); border: 2px solid #fcd34d; }
.note-lavender { background: var(--note-lavender); border: 2px solid #c4b5fd; }
.note-sky { background: var(--note-sky); border: 2px solid #7dd3fc; }

.note-tape {
  position: absolute;
  top: -4px;
  left: 50%;
  width: 48px;
  height: 22px;
  margin-left: -24px;
  background: rgba(254, 240, 138, 0.7);
  clip-path: polygon(0% 0%, 100% 0%, 95% 100%, 5% 100%);
}

.note-text {
  text-align: center;
  font-weight: 600;
  font-size: 1.05rem;
}

.note-hint {
  position: absolute;
  bottom: 0.5rem;
  right: 0.6rem;
  font-size: 0.7rem;
  color: var(--text-muted);
}

.note-heart {
  color: var(--heart-red);
  font-size: 1.75rem;
}

/* === Playlist === */
.now-playing-line {
  text-align: center;
  color: var(--rose-deep);
  margin-bottom: 1rem;
}

.track-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.track-card {
  display: flex;
  align-items: center;
  gap: 1rem;
  background: white;
  border: 2px solid transparent;
  border-radius: 1rem;
  padding: 0.75rem;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.track-card.playing {
  border-color: var(--rose);
  box-shadow: 0 8px 24px var(--rose-glow);
}

.track-cover {
  position: relative;
  flex: none;
  width: 72px;
  height: 72px;
}

.track-cover img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: 0.75rem;
}

.now-playing-badge {
  position: absolute;
  bottom: -0.5rem;
  left: 50%;
  transform: translateX(-50%);
  white-space: nowrap;
  font-size: 0.65rem;
  padding: 0.1rem 0.5rem;
  border-radius: 999px;
  background: var(--rose);
  color: white;
  animation: pulse 2s ease-in-out infinite;
}

.track-body {
  flex: 1;
  min-width: 0;
}

.track-title {
  font-size: 1.1rem;
}

.track-info {
  font-size: 0.9rem;
  color: var(--text-secondary);
}

.track-progress {
  margin-top: 0.5rem;
  height: 6px;
  border-radius: 3px;
  background: var(--blush-deep);
  overflow: hidden;
}

.track-progress-fill {
  height: 100%;
  background: linear-gradient(90deg, var(--rose), var(--heart-purple));
  transition: width 250ms linear;
}

.track-times {
  display: flex;
  justify-content: space-between;
  font-size: 0.75rem;
  color: var(--text-muted);
}

.track-toggle,
.control-btn {
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 50%;
  background: var(--blush-deep);
  color: var(--rose-deep);
  font-size: 1.1rem;
  transition: transform var(--transition-fast), background var(--transition-fast);
}

.track-toggle:hover,
.control-btn:hover {
  transform: scale(1.08);
  background: var(--blush-border);
}

.playlist-controls {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-top: 1.5rem;
}

.control-main {
  width: 3.5rem;
  height: 3.5rem;
  background: var(--rose);
  color: white;
}

.track-indicators {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1rem;
}

.track-indicator {
  width: 0.6rem;
  height: 0.6rem;
  border-radius: 50%;
  background: var(--blush-border);
  transition: width var(--transition-fast), background var(--transition-fast);
}

.track-indicator.active {
  width: 1.5rem;
  border-radius: 0.3rem;
  background: var(--rose);
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.6; }
}

/* === Floating Hearts === */
.hearts-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 50;
}

.floating-heart {
  position: absolute;
  font-size: 1.5rem;
  transform: translate(-50%, -50%);
  animation: heart-float 2s ease-out forwards;
}

.heart-pink { color: var(--rose); }
.heart-red { color: var(--heart-red); }
.heart-purple { color: var(--heart-purple); }

@keyframes heart-float {
  0% { opacity: 1; transform: translate(-50%, -50%) scale(0.6); }
  20% { transform: translate(-50%, -80%) scale(1.1); }
  100% { opacity: 0; transform: translate(-50%, -260%) scale(0.9); }
}
"#;
