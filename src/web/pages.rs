//! Embedded page assets (CSS + JS) and the per-view bodies.
//!
//! Each body starts from the `initial-view` JSON the shell injects and talks to
//! `/api/*` for every interaction; all derived numbers come from the server.

pub const BASE_CSS: &str = r##"
  :root {
    --bg: #0f172a;
    --bg-2: #2e1065;
    --card: rgba(255,255,255,.07);
    --card-dark: rgba(0,0,0,.28);
    --border: rgba(255,255,255,.12);
    --home: #3b82f6;
    --away: #ef4444;
    --sky: #38bdf8;
    --rose: #f97373;
    --green: #34d399;
    --amber: #fbbf24;
    --text: #e2e8f0;
    --muted: #94a3b8;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { min-height: 100vh; background: linear-gradient(135deg, var(--bg), var(--bg-2) 50%, var(--bg)); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  nav { display: flex; align-items: center; justify-content: space-between; height: 64px; padding: 0 2rem; background: rgba(0,0,0,.3); border-bottom: 1px solid var(--border); backdrop-filter: blur(8px); }
  nav .brand { display: flex; align-items: center; gap: .6rem; }
  nav .brand-mark { color: var(--sky); font-weight: 700; letter-spacing: -.1em; }
  nav h1 { font-size: 1.4rem; font-weight: 700; color: #fff; }
  nav .links { display: flex; gap: 1.5rem; }
  nav .links a { color: #cbd5e1; text-decoration: none; padding: .5rem .75rem; border-radius: 6px; font-size: .9rem; font-weight: 500; }
  nav .links a:hover { color: #fff; }
  nav .links a.active { color: #fff; background: rgba(255,255,255,.1); }
  main { max-width: 1280px; margin: 0 auto; padding: 2rem; }
  .panel { background: var(--card); border: 1px solid var(--border); border-radius: 14px; padding: 1.4rem; backdrop-filter: blur(8px); }
  .panel.dark { background: var(--card-dark); }
  .panel h2 { font-size: 1.8rem; color: #fff; margin-bottom: .4rem; }
  .panel h3 { font-size: 1.1rem; color: #fff; margin-bottom: 1rem; }
  .muted { color: var(--muted); }
  .kicker { font-size: .75rem; text-transform: uppercase; letter-spacing: .2em; color: var(--sky); }
  .stack { display: grid; gap: 1.5rem; }
  .two-col { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
  .four-col { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
  .three-col { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
  @media (max-width: 900px) { .two-col, .three-col, .four-col { grid-template-columns: 1fr; } }
  .chart { width: 100%; height: auto; }
  .chart .grid { stroke: rgba(255,255,255,.1); stroke-dasharray: 3 3; }
  .chart .axis { fill: var(--muted); font-size: 10px; }
  .legend { display: flex; gap: 1rem; justify-content: center; font-size: .8rem; color: var(--muted); margin-top: .4rem; }
  .legend i { display: inline-block; width: 10px; height: 10px; border-radius: 2px; margin-right: .35rem; vertical-align: middle; }
  select, button { font: inherit; }
  select { width: 100%; background: rgba(255,255,255,.08); color: #fff; border: 1px solid var(--border); border-radius: 8px; padding: .55rem .9rem; }
  select option { background: #1e293b; }
  button.primary, button.secondary { border: none; border-radius: 8px; padding: .55rem 1rem; color: #fff; cursor: pointer; }
  button.primary { background: var(--home); }
  button.primary:disabled { background: #4b5563; cursor: default; }
  button.secondary { background: #4b5563; }
  .empty { color: var(--muted); text-align: center; padding: 2rem; font-size: .9rem; }
  .not-found { max-width: 560px; margin: 4rem auto; text-align: center; }
  .not-found p { margin-top: .8rem; color: var(--muted); }
  .not-found a { color: var(--sky); }

  /* dashboard */
  .dash { display: grid; grid-template-columns: 32% 1fr 32%; gap: 2rem; align-items: stretch; }
  @media (max-width: 1100px) { .dash { grid-template-columns: 1fr; } }
  .hero-caption { font-size: 1.2rem; font-weight: 600; color: #fff; margin-top: .3rem; }
  .hub { position: relative; display: flex; flex-direction: column; align-items: center; justify-content: center; perspective: 1400px; }
  .ball { width: 100%; max-width: 520px; transform-style: preserve-3d; transition: transform .2s ease-out; }
  .ball svg { width: 100%; filter: drop-shadow(0 22px 38px rgba(0,0,0,.7)); }
  .panels { margin-top: 1.5rem; width: 100%; }
  .panels .panel { padding: .8rem 1rem; }
  .panels .title { font-size: .72rem; text-transform: uppercase; letter-spacing: .08em; }
  .panels .body { font-size: .85rem; color: #cbd5e1; margin-top: .2rem; }
  .cards { display: grid; gap: 1rem; }
  .card-head { display: flex; justify-content: space-between; font-size: .75rem; color: var(--muted); margin-bottom: .8rem; }
  .card-teams { display: grid; grid-template-columns: 1fr auto 1fr; gap: .5rem; align-items: center; }
  .card-teams .right { text-align: right; }
  .card-teams .label { font-size: .68rem; text-transform: uppercase; color: var(--muted); }
  .card-teams .name { font-size: .88rem; font-weight: 600; color: #fff; }
  .score.away { color: var(--rose); font-weight: 600; }
  .score.home { color: var(--sky); font-weight: 600; }
  .bars { display: grid; grid-template-columns: 1fr 1fr; gap: .8rem; margin-top: .9rem; }
  .bar { height: 6px; background: rgba(255,255,255,.08); border-radius: 3px; overflow: hidden; }
  .bar span { display: block; height: 100%; }
  .bar.away span { background: var(--rose); }
  .bar.home span { background: var(--sky); margin-left: auto; }
  .bar-label { font-size: .7rem; color: var(--muted); margin-top: .25rem; }

  /* comparison */
  .profile-line { display: flex; justify-content: space-between; padding: .55rem 0; border-bottom: 1px solid rgba(255,255,255,.06); }
  .profile-line:last-child { border-bottom: none; }
  .profile-line .value { color: #fff; font-weight: 600; }
  .trend { color: var(--green); margin-left: .3rem; }

  /* simulation */
  .sim-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.4rem; }
  .sim-controls { display: flex; gap: .8rem; align-items: center; }
  .clock { font-family: ui-monospace, monospace; color: var(--muted); margin-right: .6rem; }
  .tab { background: rgba(255,255,255,.05); border: 1px solid var(--border); border-radius: 10px; padding: 1rem; color: #cbd5e1; cursor: pointer; text-align: left; }
  .tab:hover { background: rgba(255,255,255,.1); }
  .tab.active { background: rgba(59,130,246,.3); border-color: var(--home); color: #fff; }
  .tab .q { font-size: .85rem; }
  .tab .s { font-size: 1.5rem; font-weight: 700; }
  .team-score .team { font-size: 1.4rem; font-weight: 700; }
  .team-score .pts { font-size: 2.4rem; font-weight: 700; color: #fff; }
  .team-score.home .team { color: var(--home); }
  .team-score.away .team { color: var(--away); }
  .events { display: grid; gap: .7rem; }
  .event { display: flex; justify-content: space-between; background: rgba(255,255,255,.05); border: 1px solid var(--border); border-radius: 8px; padding: .8rem 1rem; }
  .event .time { color: var(--muted); font-family: ui-monospace, monospace; margin-right: 1rem; }
  .event .score { color: var(--home); font-weight: 600; }
  .summary .big { font-size: 1.8rem; font-weight: 700; color: #fff; }
  .summary .winner { font-size: 1.3rem; color: var(--home); }
"##;

pub const SHARED_JS: &str = r##"
const COLORS = { home: '#3b82f6', away: '#ef4444', sky: '#38bdf8', rose: '#f97373' };

function esc(v) {
  return String(v)
    .replaceAll('&', '&amp;')
    .replaceAll('<', '&lt;')
    .replaceAll('>', '&gt;')
    .replaceAll('"', '&quot;')
    .replaceAll("'", '&#39;');
}

function initialView() {
  return JSON.parse(document.getElementById('initial-view').textContent);
}

async function fetchJson(url, init) {
  const r = await fetch(url, init);
  const body = await r.json().catch(() => ({}));
  if (!r.ok) throw new Error(body.error || ('HTTP ' + r.status));
  return body;
}

function legend(series) {
  return '<div class="legend">' + series
    .map(s => `<span><i style="background:${s.color}"></i>${esc(s.name)}</span>`)
    .join('') + '</div>';
}

// Line chart over a 0–100 axis. series: [{name, color, values}]
function lineChart(el, labels, series, opts = {}) {
  const W = 520, H = opts.height || 220, pad = 36;
  const n = labels.length;
  const x = i => n > 1 ? pad + i * (W - 2 * pad) / (n - 1) : W / 2;
  const y = v => H - pad - (v / 100) * (H - 2 * pad);
  let svg = `<svg viewBox="0 0 ${W} ${H}" class="chart">`;
  for (let i = 0; i <= 4; i++) {
    const v = i * 25, yy = y(v).toFixed(1);
    svg += `<line x1="${pad}" y1="${yy}" x2="${W - pad}" y2="${yy}" class="grid"/>`;
    svg += `<text x="${pad - 6}" y="${yy}" dy="3" class="axis" text-anchor="end">${v}</text>`;
  }
  labels.forEach((l, i) => {
    svg += `<text x="${x(i).toFixed(1)}" y="${H - pad + 16}" class="axis" text-anchor="middle">${esc(l)}</text>`;
  });
  if (opts.xTitle) svg += `<text x="${W / 2}" y="${H - 4}" class="axis" text-anchor="middle">${esc(opts.xTitle)}</text>`;
  if (opts.yTitle) svg += `<text x="10" y="${H / 2}" class="axis" text-anchor="middle" transform="rotate(-90 10 ${H / 2})">${esc(opts.yTitle)}</text>`;
  for (const s of series) {
    const pts = s.values.map((v, i) => `${x(i).toFixed(1)},${y(v).toFixed(1)}`).join(' ');
    svg += `<polyline points="${pts}" fill="none" stroke="${s.color}" stroke-width="2" stroke-linejoin="round"/>`;
    if (opts.dots) {
      s.values.forEach((v, i) => {
        svg += `<circle cx="${x(i).toFixed(1)}" cy="${y(v).toFixed(1)}" r="4" fill="${s.color}"><title>${esc(s.name)}: ${v.toFixed(1)}</title></circle>`;
      });
    }
  }
  el.innerHTML = svg + '</svg>' + legend(series);
}

// Donut chart. slices: [{name, value}]
function donut(el, slices, colors) {
  if (!slices.length) { el.innerHTML = '<div class="empty">No games scheduled</div>'; return; }
  const C = 90, R = 70, r = 40;
  const total = slices.reduce((a, s) => a + s.value, 0) || 1;
  const p = (rad, a) => `${(C + rad * Math.cos(a)).toFixed(2)},${(C + rad * Math.sin(a)).toFixed(2)}`;
  let a0 = -Math.PI / 2;
  let svg = '<svg viewBox="0 0 180 180" class="chart" style="max-height:200px">';
  slices.forEach((s, i) => {
    const a1 = a0 + 2 * Math.PI * s.value / total;
    const large = a1 - a0 > Math.PI ? 1 : 0;
    svg += `<path d="M${p(R, a0)} A${R},${R} 0 ${large} 1 ${p(R, a1)} L${p(r, a1)} A${r},${r} 0 ${large} 0 ${p(r, a0)} Z" fill="${colors[i % colors.length]}"><title>${esc(s.name)}: ${s.value.toFixed(1)}%</title></path>`;
    a0 = a1;
  });
  el.innerHTML = svg + '</svg>' + legend(slices.map((s, i) => ({ name: s.name, color: colors[i % colors.length] })));
}

// Grouped bar chart over a 0–100 axis. series: [{name, color, values}]
function barChart(el, categories, series) {
  const W = 560, H = 320, pad = 36;
  const band = (W - 2 * pad) / categories.length;
  const bw = band * 0.8 / series.length;
  const y = v => H - pad - (v / 100) * (H - 2 * pad);
  let svg = `<svg viewBox="0 0 ${W} ${H}" class="chart">`;
  for (let i = 0; i <= 4; i++) {
    const v = i * 25, yy = y(v).toFixed(1);
    svg += `<line x1="${pad}" y1="${yy}" x2="${W - pad}" y2="${yy}" class="grid"/>`;
    svg += `<text x="${pad - 6}" y="${yy}" dy="3" class="axis" text-anchor="end">${v}</text>`;
  }
  categories.forEach((c, i) => {
    const x0 = pad + i * band + band * 0.1;
    series.forEach((s, j) => {
      const v = s.values[i];
      svg += `<rect x="${(x0 + j * bw).toFixed(1)}" y="${y(v).toFixed(1)}" width="${(bw - 2).toFixed(1)}" height="${(H - pad - y(v)).toFixed(1)}" fill="${s.color}" rx="2"><title>${esc(s.name)}: ${v.toFixed(1)}</title></rect>`;
    });
    svg += `<text x="${(pad + (i + 0.5) * band).toFixed(1)}" y="${H - pad + 16}" class="axis" text-anchor="middle">${esc(c)}</text>`;
  });
  el.innerHTML = svg + '</svg>' + legend(series);
}

// Radar chart with a fixed 0–100 radius. series: [{name, color, values}]
function radarChart(el, axes, series) {
  const S = 360, C = S / 2, R = 120, n = axes.length;
  const at = (i, v) => {
    const a = -Math.PI / 2 + 2 * Math.PI * i / n;
    return [C + R * (v / 100) * Math.cos(a), C + R * (v / 100) * Math.sin(a)];
  };
  const poly = vals => vals.map((v, i) => at(i, v).map(c => c.toFixed(1)).join(',')).join(' ');
  let svg = `<svg viewBox="0 0 ${S} ${S}" class="chart" style="max-height:400px">`;
  for (const ring of [25, 50, 75, 100]) {
    svg += `<polygon points="${poly(axes.map(() => ring))}" fill="none" class="grid"/>`;
  }
  axes.forEach((label, i) => {
    const [x1, y1] = at(i, 100);
    const [lx, ly] = at(i, 118);
    svg += `<line x1="${C}" y1="${C}" x2="${x1.toFixed(1)}" y2="${y1.toFixed(1)}" class="grid"/>`;
    svg += `<text x="${lx.toFixed(1)}" y="${ly.toFixed(1)}" dy="3" class="axis" text-anchor="middle">${esc(label)}</text>`;
  });
  for (const s of series) {
    svg += `<polygon points="${poly(s.values)}" fill="${s.color}" fill-opacity="0.35" stroke="${s.color}" stroke-width="2"/>`;
  }
  el.innerHTML = svg + '</svg>' + legend(series);
}
"##;

pub const DASHBOARD_BODY: &str = r##"
<div class="dash">
  <div class="stack">
    <section class="panel">
      <div class="kicker" id="hero-kicker"></div>
      <p class="hero-caption" id="hero-caption"></p>
    </section>
    <section class="panel dark">
      <h3>Portfolio View</h3>
      <div id="portfolio-chart"></div>
    </section>
    <section class="panel dark">
      <h3>Current Anchor Game</h3>
      <div id="anchor-pie"></div>
    </section>
  </div>

  <div class="hub" id="hub">
    <div class="ball" id="ball">
      <svg viewBox="0 0 520 260" aria-label="3D football">
        <defs>
          <linearGradient id="leather" x1="0%" y1="0%" x2="100%" y2="100%">
            <stop offset="0%" stop-color="#8b4a1e"/>
            <stop offset="45%" stop-color="#6d3514"/>
            <stop offset="100%" stop-color="#3a1a07"/>
          </linearGradient>
          <radialGradient id="shine" cx="32%" cy="28%" r="70%">
            <stop offset="0%" stop-color="rgba(255,255,255,0.22)"/>
            <stop offset="72%" stop-color="rgba(0,0,0,0.35)"/>
            <stop offset="100%" stop-color="rgba(0,0,0,0.65)"/>
          </radialGradient>
        </defs>
        <path d="M 24 130 C 64 44 168 16 260 16 C 352 16 456 44 496 130 C 456 216 352 244 260 244 C 168 244 64 216 24 130 Z" fill="url(#leather)"/>
        <path d="M 24 130 C 64 44 168 16 260 16 C 352 16 456 44 496 130 C 456 216 352 244 260 244 C 168 244 64 216 24 130 Z" fill="url(#shine)"/>
        <rect x="92" y="54" width="34" height="152" rx="18" fill="rgba(255,255,255,0.95)"/>
        <rect x="394" y="54" width="34" height="152" rx="18" fill="rgba(255,255,255,0.95)"/>
        <rect x="180" y="122" width="160" height="14" rx="7" fill="rgba(255,255,255,0.92)"/>
        <g id="laces" fill="rgba(255,255,255,0.92)"></g>
      </svg>
    </div>
    <div class="panels three-col" id="panels"></div>
  </div>

  <div class="stack">
    <div>
      <div class="kicker muted">Live Board</div>
      <h3 style="color:#fff">Upcoming game projections</h3>
      <div class="muted" style="font-size:.75rem">Play-by-play context</div>
    </div>
    <div class="cards" id="cards"></div>
  </div>
</div>

<script>
(function () {
  const view = initialView();

  document.getElementById('hero-kicker').textContent = view.hero_kicker;
  document.getElementById('hero-caption').textContent = view.hero_caption;

  lineChart(document.getElementById('portfolio-chart'), view.chart.map(p => p.label), [
    { name: 'Home Win %', color: COLORS.sky, values: view.chart.map(p => p.home_prob) },
    { name: 'Away Win %', color: COLORS.rose, values: view.chart.map(p => p.away_prob) },
  ], { height: 180 });

  donut(document.getElementById('anchor-pie'), view.lead_slices, [COLORS.home, COLORS.away]);

  const tones = ['var(--sky)', 'var(--green)', 'var(--amber)'];
  document.getElementById('panels').innerHTML = view.panels.map((p, i) => `
    <div class="panel dark">
      <div class="title" style="color:${tones[i % tones.length]}">${esc(p.title)}</div>
      <div class="body">${esc(p.body)}</div>
    </div>`).join('');

  const cards = document.getElementById('cards');
  if (!view.upcoming.length) {
    cards.innerHTML = '<div class="empty">No upcoming games</div>';
  } else {
    cards.innerHTML = view.upcoming.map(c => `
      <article class="panel dark">
        <div class="card-head"><span>${esc(c.kickoff)}</span><span>${c.confidence_pct}% model confidence</span></div>
        <div class="card-teams">
          <div><div class="label">Away</div><div class="name">${esc(c.away_team)}</div><div class="score away">${c.away_score}</div></div>
          <div style="text-align:center"><div class="label">Spread</div><div class="name">${esc(c.spread)}</div></div>
          <div class="right"><div class="label">Home</div><div class="name">${esc(c.home_team)}</div><div class="score home">${c.home_score}</div></div>
        </div>
        <div class="bars">
          <div><div class="bar away"><span style="width:${c.away_bar_pct}%"></span></div><div class="bar-label">${esc(c.away_label)}</div></div>
          <div><div class="bar home"><span style="width:${c.home_bar_pct}%"></span></div><div class="bar-label" style="text-align:right">${esc(c.home_label)}</div></div>
        </div>
      </article>`).join('');
  }

  const laces = document.getElementById('laces');
  for (let i = 0; i < 7; i++) {
    laces.innerHTML += `<rect x="${196 + i * 20}" y="110" width="6" height="38" rx="3"/>`;
  }

  // Tilt the ball toward the pointer
  const hub = document.getElementById('hub');
  const ball = document.getElementById('ball');
  const REST = { x: -12, y: 18 };
  const MAX_TILT_X = 18, MAX_TILT_Y = 28;
  const tilt = r => { ball.style.transform = `rotateX(${r.x}deg) rotateY(${r.y}deg)`; };
  tilt(REST);
  hub.addEventListener('mousemove', e => {
    const rect = hub.getBoundingClientRect();
    const nx = (e.clientX - (rect.left + rect.width / 2)) / (rect.width / 2);
    const ny = (e.clientY - (rect.top + rect.height / 2)) / (rect.height / 2);
    tilt({ x: -ny * MAX_TILT_X - 8, y: nx * MAX_TILT_Y });
  });
  hub.addEventListener('mouseleave', () => tilt(REST));
})();
</script>
"##;

pub const COMPARISON_BODY: &str = r##"
<div class="stack">
  <section class="panel">
    <h2>Team Analysis &amp; Comparison</h2>
    <p class="muted">CNN + Cosine Similarity Transformer Analysis</p>
  </section>

  <div class="two-col">
    <section class="panel">
      <label class="muted" for="team1">Team 1</label>
      <select id="team1"></select>
    </section>
    <section class="panel">
      <label class="muted" for="team2">Team 2</label>
      <select id="team2"></select>
    </section>
  </div>

  <section class="panel">
    <h3>Statistical Comparison</h3>
    <div id="bar-chart"></div>
  </section>

  <section class="panel">
    <h3>Radar Comparison</h3>
    <div id="radar-chart"></div>
  </section>

  <div class="two-col" id="profiles"></div>
  <div class="empty" id="comparison-error" hidden></div>
</div>

<script>
(function () {
  const team1 = document.getElementById('team1');
  const team2 = document.getElementById('team2');
  const errorBox = document.getElementById('comparison-error');

  function fillOptions(select, teams, selected) {
    select.innerHTML = teams
      .map(t => `<option value="${esc(t)}"${t === selected ? ' selected' : ''}>${esc(t)}</option>`)
      .join('');
  }

  function render(view) {
    fillOptions(team1, view.teams, view.team1);
    fillOptions(team2, view.teams, view.team2);
    const [s1, s2] = view.series;

    barChart(document.getElementById('bar-chart'), view.rows.map(r => r.metric), [
      { name: s1, color: COLORS.home, values: view.rows.map(r => r.team1) },
      { name: s2, color: COLORS.away, values: view.rows.map(r => r.team2) },
    ]);
    radarChart(document.getElementById('radar-chart'), view.radar.map(r => r.category), [
      { name: s1, color: COLORS.home, values: view.radar.map(r => r.team1) },
      { name: s2, color: COLORS.away, values: view.radar.map(r => r.team2) },
    ]);

    document.getElementById('profiles').innerHTML = view.profiles.map(p => `
      <section class="panel">
        <h3>${esc(p.team)}</h3>
        ${p.lines.map(l => `
          <div class="profile-line">
            <span class="muted">${esc(l.label)}</span>
            <span class="value">${esc(l.value)}${l.trending ? '<span class="trend">▲</span>' : ''}</span>
          </div>`).join('')}
      </section>`).join('');
  }

  async function reselect() {
    const q = new URLSearchParams({ team1: team1.value, team2: team2.value });
    try {
      render(await fetchJson('/api/comparison?' + q.toString()));
      errorBox.hidden = true;
    } catch (e) {
      errorBox.textContent = e.message;
      errorBox.hidden = false;
    }
  }

  team1.addEventListener('change', reselect);
  team2.addEventListener('change', reselect);
  render(initialView());
})();
</script>
"##;

pub const SIMULATION_BODY: &str = r##"
<div class="stack">
  <section class="panel">
    <h2>Game Simulation</h2>
    <p class="muted">Markov Chain Decision Tree - 4 Quarter Simulation</p>
  </section>

  <section class="panel">
    <div class="sim-head">
      <div>
        <h3 id="matchup" style="font-size:1.5rem;margin-bottom:.3rem"></h3>
        <p class="muted">Simulated Game Prediction</p>
      </div>
      <div class="sim-controls">
        <span class="clock" id="clock"></span>
        <button class="primary" id="start">▶ Start Simulation</button>
        <button class="secondary" id="reset">↺ Reset</button>
      </div>
    </div>
    <div class="four-col" id="tabs"></div>
    <div class="two-col" style="margin-top:1.4rem">
      <div class="panel team-score home"><div class="muted">Home Team</div><div class="team" id="home-team"></div><div class="pts" id="home-score"></div></div>
      <div class="panel team-score away"><div class="muted">Away Team</div><div class="team" id="away-team"></div><div class="pts" id="away-score"></div></div>
    </div>
  </section>

  <div class="two-col">
    <section class="panel">
      <h3 id="chart-title"></h3>
      <div id="wp-chart"></div>
    </section>
    <section class="panel">
      <h3 id="events-title"></h3>
      <div class="events" id="events"></div>
    </section>
  </div>

  <section class="panel summary">
    <h3>Simulation Summary</h3>
    <div class="four-col">
      <div><div class="muted">Final Score</div><div class="big" id="final-score"></div></div>
      <div><div class="muted">Predicted Winner</div><div class="big winner" id="predicted-winner"></div></div>
      <div><div class="muted">Final Win Probability</div><div class="big" id="final-prob"></div></div>
      <div><div class="muted">Simulation Confidence</div><div class="big" id="confidence"></div></div>
    </div>
  </section>
  <div class="empty" id="simulation-error" hidden></div>
</div>

<script>
(function () {
  let state;
  const errorBox = document.getElementById('simulation-error');

  function render(payload) {
    state = payload.state;
    const v = payload.view;
    document.getElementById('matchup').textContent = `${v.matchup.home} vs ${v.matchup.away}`;
    document.getElementById('clock').textContent = v.clock;
    document.getElementById('start').disabled = !v.can_start;

    document.getElementById('tabs').innerHTML = v.tabs.map(t => `
      <button class="tab${t.active ? ' active' : ''}" data-quarter="${t.quarter}">
        <div class="q">Quarter ${t.quarter}</div>
        <div class="s">${esc(t.score)}</div>
      </button>`).join('');

    document.getElementById('home-team').textContent = v.scoreboard.home_team;
    document.getElementById('away-team').textContent = v.scoreboard.away_team;
    document.getElementById('home-score').textContent = v.scoreboard.home_score;
    document.getElementById('away-score').textContent = v.scoreboard.away_score;

    document.getElementById('chart-title').textContent = `Win Probability - Quarter ${v.quarter}`;
    lineChart(document.getElementById('wp-chart'), v.chart.map(p => String(p.tick)), [
      { name: 'Home Win %', color: COLORS.home, values: v.chart.map(p => p.home_pct) },
      { name: 'Away Win %', color: COLORS.away, values: v.chart.map(p => p.away_pct) },
    ], { height: 300, dots: true, xTitle: 'Time Progression', yTitle: 'Win Probability %' });

    document.getElementById('events-title').textContent = `Game Events - Quarter ${v.quarter}`;
    document.getElementById('events').innerHTML = v.events.map(e => `
      <div class="event">
        <div><span class="time">${esc(e.time)}</span><span>${esc(e.event)}</span></div>
        ${e.score ? `<span class="score">${esc(e.score)}</span>` : ''}
      </div>`).join('');

    document.getElementById('final-score').textContent = v.summary.final_score;
    document.getElementById('predicted-winner').textContent = v.summary.predicted_winner;
    document.getElementById('final-prob').textContent = v.summary.final_home_win_pct.toFixed(1) + '%';
    document.getElementById('confidence').textContent = v.summary.confidence_pct + '%';
  }

  async function dispatch(action) {
    try {
      render(await fetchJson('/api/simulation', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ state, action }),
      }));
      errorBox.hidden = true;
    } catch (e) {
      errorBox.textContent = e.message;
      errorBox.hidden = false;
    }
  }

  document.getElementById('start').addEventListener('click', () => dispatch({ type: 'start' }));
  document.getElementById('reset').addEventListener('click', () => dispatch({ type: 'reset' }));
  document.getElementById('tabs').addEventListener('click', e => {
    const tab = e.target.closest('[data-quarter]');
    if (tab) dispatch({ type: 'select_quarter', quarter: Number(tab.dataset.quarter) });
  });

  render(initialView());
})();
</script>
"##;
