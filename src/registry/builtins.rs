//! Built-in snippets - the same counter written against different front-end approaches

use super::snippet::Snippet;
use crate::compiler::Harness;

const PREACT_UMD: &str = "https://unpkg.com/preact@10/dist/preact.umd.js";
const PREACT_HOOKS_UMD: &str = "https://unpkg.com/preact@10/hooks/dist/hooks.umd.js";
const MITHRIL_UMD: &str = "https://unpkg.com/mithril@2/mithril.js";

/// Seed the registry, in sidebar order
pub fn builtin_snippets() -> Vec<Snippet> {
    let mut snippets = Vec::new();

    // --- Full documents (rendered verbatim) ---

    snippets.push(Snippet::document(
        "vanilla",
        "Vanilla JS",
        r#"<!DOCTYPE html>
<html>
<body>
  <h2>Vanilla JS Counter</h2>
  <h1 id="count">0</h1>
  <button id="btn">Increment</button>

  <script>
    let count = 0;
    const display = document.getElementById('count');
    const btn = document.getElementById('btn');

    btn.addEventListener('click', () => {
      count++;
      display.textContent = count;
    });
  </script>
</body>
</html>"#,
    ));

    snippets.push(Snippet::document(
        "jquery",
        "jQuery",
        r#"<!DOCTYPE html>
<html>
<head>
  <script src="https://code.jquery.com/jquery-3.7.1.min.js"></script>
</head>
<body>
  <h2>jQuery Counter</h2>
  <h1 id="count">0</h1>
  <button id="btn">Increment</button>

  <script>
    $(function () {
      let count = 0;
      $('#btn').on('click', function () {
        count++;
        $('#count').text(count);
      });
    });
  </script>
</body>
</html>"#,
    ));

    snippets.push(Snippet::document(
        "vue",
        "Vue.js",
        r#"<!DOCTYPE html>
<html>
<head>
  <script src="https://unpkg.com/vue@3/dist/vue.global.js"></script>
</head>
<body>
  <div id="app">
    <h2>Vue.js Counter</h2>
    <h1>{{ count }}</h1>
    <button @click="increment">Increment</button>
  </div>

  <script>
    const { createApp, ref } = Vue;

    createApp({
      setup() {
        const count = ref(0);
        const increment = () => count.value++;
        return { count, increment };
      }
    }).mount('#app');
  </script>
</body>
</html>"#,
    ));

    snippets.push(Snippet::document(
        "react",
        "React",
        r#"<!DOCTYPE html>
<html>
<head>
  <script src="https://unpkg.com/react@18/umd/react.development.js"></script>
  <script src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
  <script src="https://unpkg.com/@babel/standalone/babel.min.js"></script>
</head>
<body>
  <div id="root"></div>

  <script type="text/babel">
    function Counter() {
      const [count, setCount] = React.useState(0);

      return (
        <div>
          <h2>React Counter</h2>
          <h1>{count}</h1>
          <button onClick={() => setCount(count + 1)}>Increment</button>
        </div>
      );
    }

    const root = ReactDOM.createRoot(document.getElementById('root'));
    root.render(<Counter />);
  </script>
</body>
</html>"#,
    ));

    // --- Fragments (mounted by a harness document) ---

    snippets.push(Snippet::fragment(
        "preact",
        "Preact (h)",
        Harness::new("app")
            .with_runtime(PREACT_UMD)
            .with_runtime(PREACT_HOOKS_UMD),
        r#"// Preact counter: a component tree built with h(), mounted on #app
const { h, render } = preact;
const { useState } = preactHooks;

function Counter() {
  const [count, setCount] = useState(0);

  return h('div', null,
    h('h2', null, 'Preact Counter'),
    h('h1', null, String(count)),
    h('button', { onClick: () => setCount(count + 1) }, 'Increment')
  );
}

render(h(Counter), document.getElementById('app'));"#,
    ));

    snippets.push(Snippet::fragment(
        "mithril",
        "Mithril",
        Harness::new("app").with_runtime(MITHRIL_UMD),
        r#"// Mithril counter: redraws automatically after event handlers
let count = 0;

const Counter = {
  view: () => m('div', [
    m('h2', 'Mithril Counter'),
    m('h1', String(count)),
    m('button', { onclick: () => count++ }, 'Increment'),
  ]),
};

m.mount(document.getElementById('app'), Counter);"#,
    ));

    snippets
}
