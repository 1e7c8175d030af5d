//! Generated file templates
//!
//! These are indented to sit comfortably in source; the shared leading
//! indentation is stripped before rendering.

/// README.md template for applications
pub const README_APP: &str = r"
    # {{project_name}}

    A brand new project. Summarise me. Getting started:

    - Add/remove dependencies to the `Pipfile`
    - Use [PipEnv](https://pipenv.org/) to install project dependencies and create a virtual environment
    - Edit `setup.cfg`


    ## Python Environment

    Developed and works best with `python 3.6`+. Use [PipEnv](https://pipenv.org/) to install project dependencies and create a virtual environment.


    ## Tests

    Run linter code quality checks:

    `flake8`


    Run static type checker:

    `mypy app tests`


    Run all functional tests:

    `pytest tests --cov app`  # optionally with required code coverage `--cov-fail-under 80`

    ## CI Docker Build

    Install docker and get the command line [drone](https://drone.io/) client and run `drone exec`.


    ## Configuration & Running
    ...
    ";

/// README.md template for libraries
pub const README_LIB: &str = r"
    # {{project_name}}

    A brand new project. Summarise me. Getting started:

    - Add/remove dependencies to the `setup.py` file
    - Use [PipEnv](https://pipenv.org/) to install project dependencies and create a virtual environment
    - Edit `setup.py`


    ## {{project_name}} as a library dependency

    Requires `python 3.6`+. Follows semantic versioning.

    ## Develop {{project_name}}

    This is library code - use pipenv to install the abstract dependencies in a virtual environment from
    the `setup.py` file.

    `pipenv install -e .` for just the main packages

    `pipenv install -e '.[dev]'` for the dev packages alongside the main packages


    ## Tests

    Run linter code quality checks:

    `flake8`


    Run static type checker:

    `mypy {{project_name}} tests`


    Run all functional tests:

    `pytest tests --cov {{project_name}}`  # optionally with required code coverage `--cov-fail-under 80`

    ## CI Docker Build

    Install docker and get the command line [drone](https://drone.io/) client and run `drone exec`.

    ## Release

    To package:

    `python setup.py sdist`
    ";

/// setup.py template for libraries
pub const SETUP_PY: &str = r"
    import os
    from setuptools import setup, find_packages

    packages = [
        'daiquiri',
        'docopt',
        'result'
    ]

    dev_packages = [
        'colorama',
        'flake8',
        'hypothesis',
        'hypothesis-pytest',
        'ipython',
        'mypy',
        'pudb',
        'pytest',
        'pytest-cov',
        'pytest-flake8',
        'pytest-mock',
        'pytest-mypy',
        'pytest-pep8',
        'pytest-profiling',
        'pytest-pudb',
        'pytest-runner',
        'pytest-sugar',
        'pytest-xdist'
    ]

    setup(name='{{project_name}}',
          use_scm_version=True,
          author='',
          author_email='',
          description='',
          long_description=open(os.path.join(os.path.dirname(__file__), 'README.md')).read(),
          url='',
          classifiers=[
              'Programming Language :: Python :: 3.6',
              'Operating System :: OS Independent',
          ],
          setup_requires=['setuptools_scm'],
          tests_require=['pytest'],
          packages=find_packages(exclude=['tests']),
          install_requires=packages,
          extras_require={'dev': dev_packages})
    ";
